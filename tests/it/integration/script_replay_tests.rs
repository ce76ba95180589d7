//! Script Replay Integration Tests

use crate::helpers::RecordingBackend;
use stampdesk::script::Script;
use stampdesk::EditorError;

const SESSION: &str = r#"{
    "session_id": "abc",
    "container": {"left": 0, "top": 0, "width": 600, "height": 800},
    "document": {"page_count": 2, "pages": [
        {"page_num": 1, "width": 600, "height": 800},
        {"page_num": 2, "width": 600, "height": 800}
    ]},
    "catalog": [
        {"id": "stamp_0", "filename": "seal.png", "url": "/seal.png", "width": 100, "height": 100}
    ],
    "events": [
        {"event": "drop", "asset_id": "stamp_0", "x": 50, "y": 50},
        {"event": "down", "x": 60, "y": 60},
        {"event": "move", "x": 70, "y": 70},
        {"event": "up"},
        {"event": "down", "x": 160, "y": 160},
        {"event": "move", "x": 180, "y": 160},
        {"event": "up"},
        {"event": "next_page"},
        {"event": "drop", "asset_id": "stamp_0", "x": 300, "y": 300},
        {"event": "apply", "mode": "all_pages"}
    ]
}"#;

#[test]
fn test_replay_drives_editor_and_apply() {
    let script = Script::from_json(SESSION).unwrap();
    let backend = RecordingBackend::succeeding();

    let editor = script.run(&backend).unwrap();

    let requests = backend.requests.borrow();
    assert_eq!(requests.len(), 1);
    let stamps = &requests[0].stamps;
    assert_eq!(stamps.len(), 2);
    assert_eq!((stamps[0].page, stamps[0].x, stamps[0].y), (1, 60.0, 60.0));
    assert_eq!((stamps[0].width, stamps[0].height), (110.0, 110.0));
    assert_eq!((stamps[1].page, stamps[1].x, stamps[1].y), (2, 300.0, 300.0));
    assert_eq!(requests[0].current_page, 2);

    assert!(editor.stamps().is_empty());
    assert_eq!(editor.session_id(), "abc_signed_preview");
}

#[test]
fn test_replay_stops_on_unknown_asset() {
    let script = Script::from_json(
        r#"{"session_id": "abc", "events": [{"event": "drop", "asset_id": "missing", "x": 0, "y": 0}]}"#,
    )
    .unwrap();

    let result = script.run(&RecordingBackend::succeeding());
    assert!(matches!(result, Err(EditorError::UnknownAsset(id)) if id == "missing"));
}

#[test]
fn test_replay_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, SESSION).unwrap();

    let script = Script::load(&path).unwrap();
    assert_eq!(script.events.len(), 10);
    assert_eq!(script.catalog.len(), 1);
}
