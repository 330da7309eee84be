use rusty_phonebook::prelude::*;
use tempfile::tempdir;

fn names(view: &[&Contact]) -> Vec<String> {
    view.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn fresh_session_starts_with_sample_contacts() -> Result<(), AppError> {
    let store = ContactStore::open(MemStorage::new(), RecordingNotifier::new())?;

    let ids: Vec<&str> = store.contacts().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["id-1", "id-2", "id-3", "id-4"]);
    Ok(())
}

#[test]
fn persisted_list_is_used_as_is() -> Result<(), AppError> {
    let saved = vec![Contact {
        id: "abc".to_string(),
        name: "Jacob Mercer".to_string(),
        number: "761-23-96".to_string(),
    }];

    let store = ContactStore::open(
        MemStorage::with_contacts(saved.clone()),
        RecordingNotifier::new(),
    )?;

    assert_eq!(store.contacts(), saved.as_slice());
    assert!(store.notifier().notices().is_empty());
    Ok(())
}

#[test]
fn duplicate_rosie_is_rejected() -> Result<(), AppError> {
    let mut store = ContactStore::open(MemStorage::new(), RecordingNotifier::new())?;
    let before = store.len();

    let result = store.add("Rosie Simpson", "000-00-00");

    assert!(matches!(result, Err(AppError::DuplicateName(_))));
    assert_eq!(store.len(), before);
    assert_eq!(store.storage().data.as_deref(), Some(store.contacts()));
    Ok(())
}

#[test]
fn every_mutation_is_written_through() -> Result<(), AppError> {
    let mut store = ContactStore::open(MemStorage::new(), RecordingNotifier::new())?;

    let jacob = store.add("Jacob Mercer", "761-23-96")?;
    assert_eq!(store.storage().data.as_deref(), Some(store.contacts()));

    store.delete("id-3", "Eden Clements")?;
    assert_eq!(store.storage().data.as_deref(), Some(store.contacts()));

    let names: Vec<&str> = store.contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["Rosie Simpson", "Hermione Kline", "Annie Copeland", "Jacob Mercer"]
    );
    assert!(store.get(&jacob.id).is_some());
    Ok(())
}

#[test]
fn delete_removes_exactly_one() -> Result<(), AppError> {
    let mut store = ContactStore::open(MemStorage::new(), RecordingNotifier::new())?;

    let removed = store.delete("id-1", "Rosie Simpson")?;
    assert_eq!(removed.map(|c| c.id), Some("id-1".to_string()));
    assert_eq!(store.len(), 3);
    assert!(store.get("id-1").is_none());

    assert!(store.delete("id-1", "Rosie Simpson")?.is_none());
    assert_eq!(store.len(), 3);
    Ok(())
}

#[test]
fn filter_is_case_insensitive_substring() -> Result<(), AppError> {
    let mut store = ContactStore::open(
        MemStorage::with_contacts(vec![
            Contact::new("Annie Copeland".to_string(), "227-91-26".to_string()),
            Contact::new("Rosie Simpson".to_string(), "459-12-56".to_string()),
        ]),
        RecordingNotifier::new(),
    )?;

    assert_eq!(
        names(&store.filtered_view()),
        ["Annie Copeland", "Rosie Simpson"]
    );

    store.set_filter("ann");
    assert_eq!(names(&store.filtered_view()), ["Annie Copeland"]);

    store.set_filter("SIMP");
    assert_eq!(names(&store.filtered_view()), ["Rosie Simpson"]);
    assert!(store.notifier().notices().is_empty());
    Ok(())
}

#[test]
fn filter_is_never_persisted() -> Result<(), AppError> {
    let mut store = ContactStore::open(MemStorage::new(), RecordingNotifier::new())?;
    store.set_filter("eden");

    let (storage, _) = store.close();
    let store = ContactStore::open(storage, RecordingNotifier::new())?;

    assert_eq!(store.filter(), "");
    assert_eq!(store.filtered_view().len(), 4);
    Ok(())
}

#[test]
fn json_snapshot_round_trips_across_sessions() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");
    let path = path.to_string_lossy().to_string();

    let mut store = ContactStore::open(JsonStorage::new(&path)?, RecordingNotifier::new())?;
    store.add("Jacob Mercer", "761-23-96")?;
    store.delete("id-2", "Hermione Kline")?;
    let expected = store.contacts().to_vec();
    drop(store);

    let reopened = ContactStore::open(JsonStorage::new(&path)?, RecordingNotifier::new())?;
    assert_eq!(reopened.contacts(), expected.as_slice());

    let raw = std::fs::read_to_string(&path)?;
    let on_disk: Vec<Contact> = serde_json::from_str(&raw)?;
    assert_eq!(on_disk, expected);
    Ok(())
}

#[test]
fn emptied_list_reports_no_contacts_next_session() -> Result<(), AppError> {
    let mut store = ContactStore::open(MemStorage::new(), RecordingNotifier::new())?;
    for id in ["id-1", "id-2", "id-3", "id-4"] {
        store.delete(id, "")?;
    }
    let (storage, _) = store.close();

    let store = ContactStore::open(storage, RecordingNotifier::new())?;

    assert!(store.is_empty());
    assert_eq!(
        store.notifier().notices(),
        vec![Notice {
            message: "No contacts in your list yet".to_string(),
            severity: Severity::Info,
        }]
    );
    Ok(())
}
