//! Gesture Flow Integration Tests

use crate::helpers::{TestEditorBuilder, assert_close, gesture};
use stampdesk::geometry::point;
use stampdesk::input::coords::ContainerBounds;
use stampdesk::input::handles::{HitTarget, ResizeHandle};
use stampdesk::input::GestureKind;
use stampdesk::settings::EditorSettings;

#[test]
fn test_drag_moves_by_pointer_delta() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();

    gesture(&mut editor, (60.0, 60.0), &[(65.0, 65.0), (70.0, 70.0)]);

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.x, stamp.y), (60.0, 60.0));
    assert_eq!((stamp.width, stamp.height), (100.0, 100.0));
    assert!(editor.input_state().is_idle());
    assert_eq!(editor.selected_id(), Some(ids[0]));
}

#[test]
fn test_drag_respects_container_offset() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_container(ContainerBounds::new(200.0, 100.0, 600.0, 800.0))
        .with_stamp("square", 1, (50.0, 50.0))
        .build();

    // Stamp top-left sits at screen (250, 150)
    gesture(&mut editor, (260.0, 160.0), &[(270.0, 170.0)]);

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.x, stamp.y), (60.0, 60.0));
}

#[test]
fn test_drag_is_contained() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();

    gesture(&mut editor, (60.0, 60.0), &[(2000.0, 2000.0)]);
    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.x, stamp.y), (500.0, 700.0));

    gesture(&mut editor, (550.0, 750.0), &[(-300.0, -300.0)]);
    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.x, stamp.y), (0.0, 0.0));
}

#[test]
fn test_resize_se_locked_scenario() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();
    editor.select(ids[0]);

    assert_eq!(
        editor.hit_test(point(150.0, 150.0)),
        Some((ids[0], HitTarget::Resize(ResizeHandle::Se)))
    );
    gesture(&mut editor, (150.0, 150.0), &[(170.0, 150.0)]);

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.width, stamp.height), (110.0, 110.0));
    assert_eq!((stamp.x, stamp.y), (50.0, 50.0));
}

#[test]
fn test_resize_nw_unlocked_scenario() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("wide", 1, (100.0, 100.0))
        .build();
    editor.select(ids[0]);
    let mut edit = editor.precise_edit_form().unwrap();
    edit.maintain_aspect_ratio = false;
    assert!(editor.apply_precise_edit(&edit));

    gesture(&mut editor, (100.0, 100.0), &[(90.0, 90.0)]);

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.width, stamp.height), (210.0, 110.0));
    assert_eq!((stamp.x, stamp.y), (90.0, 90.0));
}

#[test]
fn test_locked_resize_keeps_ratio() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("wide", 1, (100.0, 100.0))
        .build();
    editor.select(ids[0]);

    gesture(&mut editor, (300.0, 200.0), &[(340.0, 200.0)]);

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_close(stamp.width, 220.0);
    assert_close(stamp.height, 110.0);
    assert_close(stamp.width / stamp.height, 2.0);
}

#[test]
fn test_resize_floor() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .with_stamp("wide", 1, (300.0, 400.0))
        .build();

    editor.select(ids[0]);
    gesture(&mut editor, (150.0, 150.0), &[(0.0, 0.0)]);
    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.width, stamp.height), (20.0, 20.0));
    assert_eq!((stamp.x, stamp.y), (50.0, 50.0));

    // Locked floor keeps the ratio: the short side stops at the minimum
    editor.select(ids[1]);
    gesture(&mut editor, (500.0, 500.0), &[(0.0, 0.0)]);
    let stamp = editor.stamps().get(ids[1]).unwrap();
    assert_close(stamp.width, 40.0);
    assert_close(stamp.height, 20.0);
}

#[test]
fn test_nw_resize_anchors_opposite_corner() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (100.0, 100.0))
        .build();
    editor.select(ids[0]);

    gesture(&mut editor, (100.0, 100.0), &[(80.0, 80.0)]);

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.width, stamp.height), (120.0, 120.0));
    assert_eq!((stamp.x + stamp.width, stamp.y + stamp.height), (200.0, 200.0));
}

#[test]
fn test_resize_growth_stops_at_container_edge() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (450.0, 100.0))
        .build();
    editor.select(ids[0]);

    gesture(&mut editor, (550.0, 200.0), &[(700.0, 200.0)]);

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_close(stamp.width, 150.0);
    assert_close(stamp.height, 150.0);
    assert_eq!(stamp.x, 450.0);
}

#[test]
fn test_rotation_accumulates_from_initial() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (100.0, 100.0))
        .build();
    editor.select(ids[0]);

    // Rotate handle sits 25px above the top edge, centred
    assert_eq!(editor.hit_test(point(150.0, 75.0)), Some((ids[0], HitTarget::Rotate)));
    gesture(&mut editor, (150.0, 75.0), &[(225.0, 150.0)]);
    assert_close(editor.stamps().get(ids[0]).unwrap().rotation, 90.0);

    // The handle turned with the stamp
    assert_eq!(editor.hit_test(point(225.0, 150.0)), Some((ids[0], HitTarget::Rotate)));
    gesture(&mut editor, (225.0, 150.0), &[(150.0, 225.0)]);
    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_close(stamp.rotation, 180.0);
    assert_eq!((stamp.x, stamp.y), (100.0, 100.0));
    assert_eq!((stamp.width, stamp.height), (100.0, 100.0));
}

#[test]
fn test_handles_only_on_selected_stamp() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();

    assert_eq!(editor.hit_test(point(150.0, 150.0)), Some((ids[0], HitTarget::Body)));
    assert_eq!(editor.hit_test(point(100.0, 25.0)), None);

    editor.select(ids[0]);
    assert_eq!(
        editor.hit_test(point(150.0, 150.0)),
        Some((ids[0], HitTarget::Resize(ResizeHandle::Se)))
    );
}

#[test]
fn test_topmost_stamp_wins() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .with_stamp("square", 1, (100.0, 100.0))
        .build();

    assert_eq!(editor.hit_test(point(120.0, 120.0)), Some((ids[1], HitTarget::Body)));
    assert!(editor.handle_pointer_down(point(120.0, 120.0)));
    assert_eq!(editor.input_state().target(), Some(ids[1]));
    editor.handle_pointer_up();
}

#[test]
fn test_pointer_down_on_empty_area_keeps_selection() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();
    editor.select(ids[0]);

    assert!(!editor.handle_pointer_down(point(400.0, 600.0)));
    assert!(editor.input_state().is_idle());
    assert_eq!(editor.selected_id(), Some(ids[0]));
}

#[test]
fn test_move_and_up_without_session_are_noops() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();

    assert_eq!(editor.handle_pointer_move(point(300.0, 300.0)), None);
    assert_eq!(editor.handle_pointer_up(), None);
    assert_eq!(editor.cancel_gesture(), None);
    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.x, stamp.y), (50.0, 50.0));
}

#[test]
fn test_cancel_keeps_progress_and_returns_to_idle() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();

    assert!(editor.handle_pointer_down(point(60.0, 60.0)));
    assert_eq!(editor.input_state().kind(), Some(GestureKind::Drag));
    editor.handle_pointer_move(point(80.0, 90.0));
    assert_eq!(editor.cancel_gesture(), Some(ids[0]));

    assert!(editor.input_state().is_idle());
    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.x, stamp.y), (70.0, 80.0));
}

#[test]
fn test_hit_area_follows_dragged_stamp() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();

    gesture(&mut editor, (60.0, 60.0), &[(360.0, 460.0)]);

    assert_eq!(editor.hit_test(point(60.0, 60.0)), None);
    assert_eq!(editor.hit_test(point(380.0, 480.0)), Some((ids[0], HitTarget::Body)));
}

#[test]
fn test_removing_target_mid_gesture_ends_it() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();

    assert!(editor.handle_pointer_down(point(60.0, 60.0)));
    assert!(editor.remove_selected());
    assert!(editor.input_state().is_idle());
    assert_eq!(editor.handle_pointer_move(point(70.0, 70.0)), None);
    assert!(editor.stamps().get(ids[0]).is_none());
}

#[test]
fn test_remove_and_clear_are_idempotent() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .with_stamp("square", 1, (300.0, 300.0))
        .build();

    editor.select(ids[0]);
    assert!(editor.remove_selected());
    assert!(!editor.remove_selected());
    assert!(!editor.remove(ids[0]));
    assert_eq!(editor.selected_id(), None);
    assert_eq!(editor.stamps().len(), 1);

    editor.clear_all();
    editor.clear_all();
    assert!(editor.stamps().is_empty());
    assert_eq!(editor.hit_test(point(310.0, 310.0)), None);
}

#[test]
fn test_precise_edit_bypasses_floor_and_containment() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .build();
    editor.select(ids[0]);

    let mut edit = editor.precise_edit_form().unwrap();
    edit.x = 900.0;
    edit.width = 5.0;
    edit.height = 5.0;
    edit.rotation = 725.0;
    assert!(editor.apply_precise_edit(&edit));

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.x, stamp.width, stamp.height), (900.0, 5.0, 5.0));
    assert_eq!(stamp.rotation, 725.0);
    assert_eq!(editor.page_view().stamps[0].rotation, 5.0);
}

#[test]
fn test_pointer_down_during_gesture_is_ignored() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_stamp("square", 1, (50.0, 50.0))
        .with_stamp("square", 1, (400.0, 400.0))
        .build();

    assert!(editor.handle_pointer_down(point(60.0, 60.0)));
    editor.handle_pointer_move(point(260.0, 260.0));

    // A second press without a release must not steal the gesture
    assert!(!editor.handle_pointer_down(point(450.0, 450.0)));
    assert!(!editor.begin_gesture(ids[1], HitTarget::Body, point(450.0, 450.0)));
    assert_eq!(editor.input_state().target(), Some(ids[0]));
    assert_eq!(editor.selected_id(), Some(ids[0]));

    assert_eq!(editor.handle_pointer_up(), Some(ids[0]));
    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.x, stamp.y), (250.0, 250.0));
    assert_eq!(editor.hit_test(point(300.0, 300.0)), Some((ids[0], HitTarget::Body)));
    assert_eq!(editor.hit_test(point(60.0, 60.0)), None);
}

#[test]
fn test_configured_minimum_size_and_explicit_stamp_size() {
    let settings = EditorSettings {
        min_stamp_size: 40.0,
        ..EditorSettings::default()
    };
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_settings(settings)
        .with_sized_stamp("square", 1, (50.0, 50.0), (60.0, 60.0))
        .build();
    editor.select(ids[0]);

    gesture(&mut editor, (110.0, 110.0), &[(0.0, 0.0)]);

    let stamp = editor.stamps().get(ids[0]).unwrap();
    assert_eq!((stamp.width, stamp.height), (40.0, 40.0));
    assert_eq!((stamp.x, stamp.y), (50.0, 50.0));
}
