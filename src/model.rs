use std::fmt;

use serde::{Deserialize, Serialize};

// ------------- ReservationId -------------
pub type ReservationId = u64;

pub const GENESIS: ReservationId = 0;

/// Hands out reservation ids from a strictly increasing counter.
///
/// Ids are never reused or reassigned, so the generator only moves its
/// lower bound upward. When a persisted document is loaded the bound is
/// raised past every id found in it, which keeps ids collision-free
/// across process restarts.
#[derive(Debug)]
pub struct IdGenerator {
    lower_bound: ReservationId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            lower_bound: GENESIS,
        }
    }
    // Called while restoring a persisted collection, so that freshly
    // generated ids never collide with ids handed out in earlier runs.
    pub fn raise_to(&mut self, seen: ReservationId) {
        if seen > self.lower_bound {
            self.lower_bound = seen;
        }
    }
    pub fn generate(&mut self) -> ReservationId {
        self.lower_bound += 1;
        self.lower_bound
    }
    pub fn lower_bound(&self) -> ReservationId {
        self.lower_bound
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Reservation -------------
/// A booking of a room for a specific date and time by a named owner.
///
/// `date` and `time` stay as strings throughout: the contract asks for a
/// shape check only (`2025-02-30` is accepted), so parsing them into
/// calendar types would reject input the system must accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub room: String,
    pub date: String,
    pub time: String,
    pub owner: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl Reservation {
    /// ISO-concatenated (date, time) key; lexicographic order on this key
    /// is chronological order for well-formed dates and times.
    pub fn schedule_key(&self) -> String {
        format!("{}T{}", self.date, self.time)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} on {} at {} for {}",
            self.id, self.room, self.date, self.time, self.owner
        )
    }
}

// ------------- Conflict detection -------------
/// True when some reservation other than `exclude` occupies the same room
/// (case-insensitively) at exactly the same date and time.
///
/// `exclude` is only ever set when a record is updated, so it does not
/// collide with itself. First match wins; this is an existence check.
pub fn conflicts(
    reservations: &[Reservation],
    room: &str,
    date: &str,
    time: &str,
    exclude: Option<ReservationId>,
) -> bool {
    let folded = room.to_lowercase();
    reservations.iter().any(|r| {
        if exclude == Some(r.id) {
            return false;
        }
        r.room.to_lowercase() == folded && r.date == date && r.time == time
    })
}
