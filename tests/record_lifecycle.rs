//! Record lifecycle invariants across service, repository and extractor.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use serde_json::json;
use solar_panel_data::{
    ErrorKind, InMemorySolarPanelDataRepository, SolarEvents, SolarPanelData,
    SolarPanelDataError, SolarPanelDataEventExtractor, SolarPanelDataService, StoreOperation,
};

fn setup() -> (Arc<InMemorySolarPanelDataRepository>, SolarPanelDataService) {
    let repo = Arc::new(InMemorySolarPanelDataRepository::new());
    let service = SolarPanelDataService::new(repo.clone());
    (repo, service)
}

fn record(entries: Vec<(&str, Vec<Vec<&str>>)>, wind: serde_json::Value) -> SolarPanelData {
    let mut solar = SolarEvents::new();
    for (parameter_id, events) in entries {
        solar.insert(
            parameter_id.to_string(),
            events
                .into_iter()
                .map(|e| e.into_iter().map(String::from).collect())
                .collect(),
        );
    }
    SolarPanelData::new(Some(solar), wind)
}

#[test]
fn test_round_trip() {
    let (_repo, service) = setup();
    let data = record(
        vec![
            ("p1", vec![vec!["t1", "v1"], vec!["t2", "v2"]]),
            ("p2", vec![vec!["t1"]]),
        ],
        json!({ "gusts": [3.5, 7.25], "site": "north" }),
    );

    let id = service.create(&data).unwrap();
    assert_eq!(service.get(&id).unwrap(), data);
}

#[test]
fn test_round_trip_empty_solar() {
    let (_repo, service) = setup();
    let data = record(vec![], json!(null));

    let id = service.create(&data).unwrap();
    assert_eq!(service.get(&id).unwrap(), data);
}

#[test]
fn test_unknown_id_not_found() {
    let (_repo, service) = setup();
    service.create(&record(vec![], json!(null))).unwrap();

    let get_err = service.get("0000-unknown").unwrap_err();
    assert_eq!(get_err.kind(), ErrorKind::NotFound);
    assert_eq!(
        get_err,
        SolarPanelDataError::not_found("0000-unknown", StoreOperation::Get)
    );

    let update_err = service
        .update("0000-unknown", &record(vec![], json!(null)))
        .unwrap_err();
    assert_eq!(update_err.kind(), ErrorKind::NotFound);
    assert_eq!(update_err.status_code(), 404);
}

#[test]
fn test_delete_idempotent() {
    let (repo, service) = setup();
    let id = service.create(&record(vec![], json!(null))).unwrap();

    assert!(service.delete(&id).is_ok());
    assert!(service.delete(&id).is_ok());
    assert!(service.delete("never-created").is_ok());
    assert!(repo.is_empty());

    // ids are not revived by later creates
    let next = service.create(&record(vec![], json!(null))).unwrap();
    assert_ne!(next, id);
    assert_eq!(service.get(&id).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_empty_solar_rejected_without_store_change() {
    let (repo, service) = setup();
    let original = record(vec![("p1", vec![vec!["t1", "v1"]])], json!(1));
    let id = service.create(&original).unwrap();

    for wind in [json!(null), json!({ "w": 1 }), json!([1, 2, 3])] {
        let without_solar = SolarPanelData::new(None, wind);

        assert_eq!(
            service.create(&without_solar).unwrap_err(),
            SolarPanelDataError::EmptySolarData
        );
        assert_eq!(
            service.update(&id, &without_solar).unwrap_err(),
            SolarPanelDataError::EmptySolarData
        );
        assert_eq!(
            service.update("missing", &without_solar).unwrap_err(),
            SolarPanelDataError::EmptySolarData
        );
    }

    assert_eq!(repo.len(), 1);
    assert_eq!(service.get(&id).unwrap(), original);
}

#[test]
fn test_update_replaces_not_merges() {
    let (_repo, service) = setup();
    let id = service
        .create(&record(
            vec![("p1", vec![vec!["t1", "v1"]]), ("p2", vec![vec!["t1", "v2"]])],
            json!({ "a": 1 }),
        ))
        .unwrap();

    let replacement = record(vec![("p3", vec![vec!["t9", "v9"]])], json!(null));
    service.update(&id, &replacement).unwrap();

    assert_eq!(service.get(&id).unwrap(), replacement);
}

#[test]
fn test_export_of_stored_record() {
    let (_repo, service) = setup();
    let extractor = SolarPanelDataEventExtractor::new();
    let id = service
        .create(&record(
            vec![("p2", vec![vec!["t1", "v2"]]), ("p1", vec![vec!["t1", "v1"]])],
            json!(null),
        ))
        .unwrap();

    let rows = extractor.extract_events(&service.get(&id).unwrap()).unwrap();
    assert_eq!(
        rows,
        vec![
            vec!["Events".to_string()],
            vec!["v1".to_string()],
            vec!["v2".to_string()],
        ]
    );
}

#[test]
fn test_malformed_stored_record_fails_export_only() {
    let (_repo, service) = setup();
    let extractor = SolarPanelDataEventExtractor::new();

    // malformed events are accepted on write and caught on export
    let id = service
        .create(&record(vec![("p1", vec![vec!["t1", ""]])], json!(null)))
        .unwrap();

    let err = extractor
        .extract_events(&service.get(&id).unwrap())
        .unwrap_err();
    assert_eq!(err, SolarPanelDataError::malformed_event_data("p1"));
}

#[test]
fn test_concurrent_access() {
    let (repo, service) = setup();
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let service = service.clone();
            thread::spawn(move || {
                let mut ids = Vec::new();
                for i in 0..per_thread {
                    let value = format!("{}-{}", t, i);
                    let data = record(vec![("p", vec![vec!["t", value.as_str()]])], json!(t));
                    let id = service.create(&data).unwrap();
                    service.update(&id, &data).unwrap();
                    assert_eq!(service.get(&id).unwrap(), data);
                    ids.push(id);
                }
                // delete half of them again
                for id in ids.iter().step_by(2) {
                    service.delete(id).unwrap();
                }
                ids
            })
        })
        .collect();

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all_ids.insert(id));
        }
    }

    assert_eq!(all_ids.len(), threads * per_thread);
    assert_eq!(repo.len(), threads * per_thread / 2);
}
