//! The store owns the persisted collection and exposes the four
//! operations the HTTP layer needs. Each operation is a complete
//! load → check → mutate → persist unit against the durable medium;
//! nothing is cached in memory between operations, so the document on
//! disk stays the single source of truth.

use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::error::{BookingError, Result};
use crate::model::{conflicts, IdGenerator, Reservation, ReservationId};
use crate::persist::{Document, PersistenceMode, Persistor};
use crate::validate::{validate, ReservationDraft};

/// Optional narrowing of a list call. The room filter is a
/// case-insensitive substring match, while conflict detection uses
/// case-insensitive equality; the two matching semantics are
/// intentionally kept apart.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub room: Option<String>,
    pub date: Option<String>,
}

pub struct Store {
    persistor: Persistor,
    ids: Mutex<IdGenerator>,
    // Serializes every load-mutate-persist cycle. Without it two
    // concurrent writes could both pass the conflict check against the
    // same pre-mutation snapshot and the later persist would silently
    // drop the earlier one.
    write_lock: Mutex<()>,
}

impl Store {
    /// Open a store in the given mode. The document is loaded once here
    /// to seed the id generator past every previously assigned id.
    pub fn new(mode: PersistenceMode) -> Result<Store> {
        let persistor = Persistor::new(mode);
        let document = persistor.load()?;
        let mut ids = IdGenerator::new();
        for reservation in &document.reservations {
            ids.raise_to(reservation.id);
        }
        debug!(
            restored = document.reservations.len(),
            next_id = ids.lower_bound() + 1,
            "store opened"
        );
        Ok(Store {
            persistor,
            ids: Mutex::new(ids),
            write_lock: Mutex::new(()),
        })
    }

    /// All reservations matching the filter, sorted ascending by the
    /// ISO-concatenated (date, time) key regardless of storage order.
    pub fn list(&self, filter: &ListFilter) -> Result<Vec<Reservation>> {
        let document = self.persistor.load()?;
        let room_needle = filter.room.as_deref().map(str::to_lowercase);
        let mut rows: Vec<Reservation> = document
            .reservations
            .into_iter()
            .filter(|r| match &room_needle {
                Some(needle) => r.room.to_lowercase().contains(needle),
                None => true,
            })
            .filter(|r| match &filter.date {
                Some(date) => &r.date == date,
                None => true,
            })
            .collect();
        rows.sort_by(|a, b| a.schedule_key().cmp(&b.schedule_key()));
        Ok(rows)
    }

    pub fn create(&self, draft: &ReservationDraft) -> Result<Reservation> {
        let fields = validate(draft)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| BookingError::Lock(e.to_string()))?;
        let mut document = self.persistor.load()?;
        self.raise_ids(&document)?;
        if conflicts(
            &document.reservations,
            &fields.room,
            &fields.date,
            &fields.time,
            None,
        ) {
            return Err(BookingError::Conflict);
        }
        let id = self
            .ids
            .lock()
            .map_err(|e| BookingError::Lock(e.to_string()))?
            .generate();
        let reservation = Reservation {
            id,
            room: fields.room,
            date: fields.date,
            time: fields.time,
            owner: fields.owner,
            created_at: now(),
            updated_at: None,
        };
        document.reservations.push(reservation.clone());
        self.persistor.persist(&document)?;
        Ok(reservation)
    }

    /// Overwrite the fields of an existing reservation. The record being
    /// updated is excluded from the conflict check, so writing a
    /// reservation's own (room, date, time) back to it succeeds. `id`
    /// and `created_at` are immutable; `updated_at` is refreshed on
    /// every successful update.
    pub fn update(&self, id: ReservationId, draft: &ReservationDraft) -> Result<Reservation> {
        let fields = validate(draft)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| BookingError::Lock(e.to_string()))?;
        let mut document = self.persistor.load()?;
        self.raise_ids(&document)?;
        if !document.reservations.iter().any(|r| r.id == id) {
            return Err(BookingError::NotFound(id));
        }
        if conflicts(
            &document.reservations,
            &fields.room,
            &fields.date,
            &fields.time,
            Some(id),
        ) {
            return Err(BookingError::Conflict);
        }
        // The existence check above makes this find infallible.
        let reservation = document
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(BookingError::NotFound(id))?;
        reservation.room = fields.room;
        reservation.date = fields.date;
        reservation.time = fields.time;
        reservation.owner = fields.owner;
        reservation.updated_at = Some(now());
        let updated = reservation.clone();
        self.persistor.persist(&document)?;
        Ok(updated)
    }

    pub fn delete(&self, id: ReservationId) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| BookingError::Lock(e.to_string()))?;
        let mut document = self.persistor.load()?;
        let before = document.reservations.len();
        document.reservations.retain(|r| r.id != id);
        if document.reservations.len() == before {
            return Err(BookingError::NotFound(id));
        }
        self.persistor.persist(&document)?;
        Ok(())
    }

    // Another process run may have written ids this generator has not
    // seen; every fresh load gets a chance to push the bound up.
    fn raise_ids(&self, document: &Document) -> Result<()> {
        let mut ids = self
            .ids
            .lock()
            .map_err(|e| BookingError::Lock(e.to_string()))?;
        for reservation in &document.reservations {
            ids.raise_to(reservation.id);
        }
        Ok(())
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
