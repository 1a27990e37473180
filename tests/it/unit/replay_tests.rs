//! Unit tests for replay scripts, with an insta snapshot of the touch scenario.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use panel_resize::replay::{css_px, ReplayScript};
use panel_resize::ResizeError;
use std::fs;
use tempfile::tempdir;

const TOUCH_SCENARIO: &str = r#"{
  "panels": [200.0],
  "steps": [
    { "origin": { "handle": 0 },
      "event": { "device": "touch", "kind": "start", "touches": [{ "client_y": 300.0 }] } },
    { "origin": "document",
      "event": { "device": "touch", "kind": "move", "touches": [{ "client_y": 260.0 }] } },
    { "origin": "document",
      "event": { "device": "touch", "kind": "move", "touches": [{ "client_y": 50.0 }] } },
    { "origin": "document",
      "event": { "device": "touch", "kind": "end", "changed_touches": [{ "client_y": 50.0 }] } }
  ]
}"#;

#[test]
fn snapshot_touch_scenario() {
    let script = ReplayScript::from_json_str(TOUCH_SCENARIO).unwrap();
    let report = script.run().unwrap();
    insta::assert_json_snapshot!("touch_scenario", report);
}

#[test]
fn test_mixed_devices_and_unresolved_panel() {
    let script = ReplayScript::from_json_str(
        r#"{
          "config": { "min_height": 50 },
          "panels": [null, 120.0],
          "steps": [
            { "origin": { "handle": 1 }, "event": { "device": "mouse", "kind": "down", "client_y": 400.0 } },
            { "origin": "document", "event": { "device": "mouse", "kind": "move", "client_y": 300.0 } },
            { "origin": "document", "event": { "device": "mouse", "kind": "up", "client_y": 300.0 } }
          ]
        }"#,
    )
    .unwrap();

    let report = script.run().unwrap();
    assert_eq!(report.bindings, 6);
    assert_eq!(report.frames[1].heights, vec![None, Some("50px".to_string())]);
    assert_eq!(report.frames[1].active_sessions, 1);
    assert_eq!(report.frames[2].active_sessions, 0);
    assert_eq!(report.listeners_after_teardown, 0);
}

#[test]
fn test_step_targeting_missing_handle_rejected() {
    let err = ReplayScript::from_json_str(
        r#"{
          "panels": [200.0],
          "steps": [
            { "origin": { "handle": 3 }, "event": { "device": "mouse", "kind": "down", "client_y": 1.0 } }
          ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ResizeError::Replay { step: 0, .. }));
}

#[test]
fn test_load_script_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.json");
    fs::write(&path, TOUCH_SCENARIO).unwrap();

    let script = ReplayScript::load(&path).unwrap();
    assert_eq!(script.steps.len(), 4);
    assert_eq!(script.panels, vec![Some(200.0)]);
}

#[test]
fn test_css_px_matches_style_format() {
    assert_eq!(css_px(160.0), "160px");
    assert_eq!(css_px(100.5), "100.5px");
}
