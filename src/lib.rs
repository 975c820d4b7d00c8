//! Roombook – a small single-resource reservation manager exposed over HTTP.
//!
//! Clients create, list, update and delete room-booking records; the server
//! validates every write and rejects double-booking of a room at a given
//! date and time. The whole collection lives in a single JSON document,
//! which is treated as the source of truth: every operation loads it
//! fresh, mutates a scratch copy and writes the document back in full.
//!
//! ## Modules
//! * [`model`] – The [`model::Reservation`] record, the monotonic
//!   [`model::IdGenerator`] and conflict detection over a collection.
//! * [`validate`] – Pure field validation: trimming and presence, the
//!   `YYYY-MM-DD` date shape and the 24-hour `HH:MM` time shape.
//! * [`persist`] – The [`persist::Persistor`] reads and writes the JSON
//!   document, either file-backed or in memory for tests.
//! * [`store`] – The [`store::Store`] wires a persistor together with the
//!   id generator and a mutation lock, and exposes list/create/update/
//!   delete as complete load-check-mutate-persist units.
//! * [`server`] – The axum router, the JSON handlers and the mapping from
//!   [`error::BookingError`] to HTTP status codes.
//! * [`config`] – Runtime [`config::Settings`] (listen address, data file).
//!
//! ## Matching semantics
//! Conflict detection treats room names as case-insensitive keys for
//! *equality*, while the `room` filter on listing is a case-insensitive
//! *substring* match. The asymmetry is part of the contract and the two
//! are deliberately not unified.
//!
//! ## Concurrency
//! Reads load the document freshly and run unserialized. Mutating
//! operations take the store's write lock, making each load → conflict
//! check → persist cycle a critical section; without it two concurrent
//! writes could both pass the conflict check against the same snapshot
//! and the later persist would drop the earlier write.
//!
//! ## Quick Start
//! ```
//! use roombook::persist::PersistenceMode;
//! use roombook::store::{ListFilter, Store};
//! use roombook::validate::ReservationDraft;
//!
//! let store = Store::new(PersistenceMode::InMemory).unwrap();
//! let draft = ReservationDraft {
//!     room: Some("Lab-A".into()),
//!     date: Some("2025-12-19".into()),
//!     time: Some("10:00".into()),
//!     owner: Some("Alice".into()),
//! };
//! let created = store.create(&draft).unwrap();
//! let rows = store.list(&ListFilter::default()).unwrap();
//! assert_eq!(rows, vec![created]);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod persist;
pub mod server;
pub mod store;
pub mod validate;
