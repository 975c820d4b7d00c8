use roombook::error::BookingError;
use roombook::persist::PersistenceMode;
use roombook::store::{ListFilter, Store};
use roombook::validate::ReservationDraft;

fn draft(room: &str, date: &str, time: &str, owner: &str) -> ReservationDraft {
    ReservationDraft {
        room: Some(room.to_string()),
        date: Some(date.to_string()),
        time: Some(time.to_string()),
        owner: Some(owner.to_string()),
    }
}

fn filter(room: Option<&str>, date: Option<&str>) -> ListFilter {
    ListFilter {
        room: room.map(str::to_string),
        date: date.map(str::to_string),
    }
}

#[test]
fn created_reservation_listed_exactly_once() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    let created = store
        .create(&draft("Lab-A", "2025-12-19", "10:00", "Alice"))
        .expect("create");
    assert!(created.id > 0);
    assert!(created.updated_at.is_none());

    let rows = store
        .list(&filter(Some("Lab-A"), Some("2025-12-19")))
        .expect("list");
    assert_eq!(rows, vec![created]);
}

#[test]
fn ids_are_strictly_increasing() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    let a = store
        .create(&draft("A", "2025-01-01", "10:00", "X"))
        .expect("a");
    let b = store
        .create(&draft("B", "2025-01-01", "10:00", "X"))
        .expect("b");
    assert!(b.id > a.id);
}

#[test]
fn list_is_sorted_by_date_then_time() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    // Inserted out of chronological order on purpose.
    for (room, date, time) in [
        ("C", "2025-12-20", "09:00"),
        ("A", "2025-12-19", "14:00"),
        ("B", "2025-12-19", "09:30"),
        ("D", "2024-01-01", "23:59"),
    ] {
        store.create(&draft(room, date, time, "X")).expect("create");
    }
    let rows = store.list(&ListFilter::default()).expect("list");
    let keys: Vec<String> = rows.iter().map(|r| r.schedule_key()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "response must be in (date, time) order");
    assert_eq!(rows[0].room, "D");
    assert_eq!(rows[3].room, "C");
}

#[test]
fn room_filter_is_case_insensitive_substring() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    store
        .create(&draft("Lab-A", "2025-12-19", "10:00", "Alice"))
        .expect("create");
    store
        .create(&draft("Office 3", "2025-12-19", "10:00", "Bob"))
        .expect("create");

    let rows = store.list(&filter(Some("lab"), None)).expect("list");
    assert_eq!(rows.len(), 1, "substring match ignoring case");
    assert_eq!(rows[0].room, "Lab-A");

    let rows = store.list(&filter(Some("nowhere"), None)).expect("list");
    assert!(rows.is_empty());
}

#[test]
fn date_filter_is_exact() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    store
        .create(&draft("Lab-A", "2025-12-19", "10:00", "Alice"))
        .expect("create");
    let rows = store.list(&filter(None, Some("2025-12"))).expect("list");
    assert!(rows.is_empty(), "date filter never matches on prefix");
}

#[test]
fn update_overwrites_fields_and_stamps_updated_at() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    let created = store
        .create(&draft("Lab-A", "2025-12-19", "10:00", "Alice"))
        .expect("create");
    let updated = store
        .update(created.id, &draft("Lab-B", "2025-12-20", "11:00", "Bob"))
        .expect("update");
    assert_eq!(updated.id, created.id, "id is immutable");
    assert_eq!(updated.created_at, created.created_at, "created_at too");
    assert_eq!(updated.room, "Lab-B");
    assert_eq!(updated.owner, "Bob");
    assert!(updated.updated_at.is_some());
}

#[test]
fn update_of_unknown_id_is_not_found() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    let res = store.update(999, &draft("Lab-A", "2025-12-19", "10:00", "Alice"));
    assert!(matches!(res, Err(BookingError::NotFound(999))));
}

#[test]
fn delete_removes_exactly_the_matching_record() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    let a = store
        .create(&draft("A", "2025-01-01", "10:00", "X"))
        .expect("a");
    let b = store
        .create(&draft("B", "2025-01-01", "10:00", "X"))
        .expect("b");
    store.delete(a.id).expect("delete");
    let rows = store.list(&ListFilter::default()).expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, b.id);
}

#[test]
fn delete_of_unknown_id_leaves_collection_unchanged() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    store
        .create(&draft("A", "2025-01-01", "10:00", "X"))
        .expect("create");
    let res = store.delete(12345);
    assert!(matches!(res, Err(BookingError::NotFound(12345))));
    let rows = store.list(&ListFilter::default()).expect("list");
    assert_eq!(rows.len(), 1, "failed delete must not change the count");
}

#[test]
fn invalid_drafts_never_reach_the_collection() {
    let store = Store::new(PersistenceMode::InMemory).expect("store");
    let res = store.create(&draft("Lab-A", "2025-1-1", "10:00", "Alice"));
    assert!(matches!(res, Err(BookingError::InvalidDateFormat)));
    let res = store.create(&draft("Lab-A", "2025-01-01", "9:00", "Alice"));
    assert!(matches!(res, Err(BookingError::InvalidTimeFormat)));
    assert!(store.list(&ListFilter::default()).expect("list").is_empty());
}
