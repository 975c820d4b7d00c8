// ------------- Persistence -------------
// The durable medium is a single JSON document holding the whole
// collection. Every load reads it back in full and every persist writes
// it back in full; there is no partial update path.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::model::Reservation;

/// The exact shape of the persisted document. It round-trips through
/// serde without loss, and storage order is whatever the store left
/// behind (sorting happens at read time, never on disk).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub reservations: Vec<Reservation>,
}

pub enum PersistenceMode {
    /// Keep the serialized document in memory only. Mostly useful for
    /// tests; the full serialize/deserialize cycle still runs.
    InMemory,
    /// Back the document with a file at the given path.
    File(PathBuf),
}

pub struct Persistor {
    mode: PersistenceMode,
    // Backing text when running in memory; unused in file mode.
    buffer: Mutex<String>,
}

impl Persistor {
    pub fn new(mode: PersistenceMode) -> Self {
        Self {
            mode,
            buffer: Mutex::new(String::new()),
        }
    }

    /// Read the document fresh from the durable medium. A missing or
    /// empty medium yields an empty collection rather than an error.
    pub fn load(&self) -> Result<Document> {
        let text = match &self.mode {
            PersistenceMode::File(path) => match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
                Err(e) => return Err(BookingError::Persistence(e.to_string())),
            },
            PersistenceMode::InMemory => self
                .buffer
                .lock()
                .map_err(|e| BookingError::Lock(e.to_string()))?
                .clone(),
        };
        if text.trim().is_empty() {
            return Ok(Document::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the document back. File mode writes a sibling temp file and
    /// renames it over the target, so a crash mid-write leaves the
    /// previously committed document intact.
    pub fn persist(&self, document: &Document) -> Result<()> {
        let text = serde_json::to_string_pretty(document)?;
        match &self.mode {
            PersistenceMode::File(path) => {
                let tmp = path.with_extension("json.tmp");
                fs::write(&tmp, &text)?;
                fs::rename(&tmp, path)?;
            }
            PersistenceMode::InMemory => {
                *self
                    .buffer
                    .lock()
                    .map_err(|e| BookingError::Lock(e.to_string()))? = text;
            }
        }
        Ok(())
    }
}
