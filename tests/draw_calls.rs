mod common;

use common::{DrawCall, client, drag, recording_controller};
use egui::{Color32, Vec2, pos2};
use sketch_canvas::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Tool};

#[test]
fn test_stamp_top_left_is_exact_for_every_brush_size() {
    for size in MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE {
        let mut controller = recording_controller();
        controller.set_brush_size(size);
        drag(&mut controller, Tool::Pencil, pos2(37.0, 41.0), &[]);

        let calls = &controller.committed().unwrap().calls;
        assert_eq!(
            calls,
            &vec![DrawCall::FillRect {
                origin: pos2(37.0, 41.0),
                size: Vec2::splat(size as f32),
                color: Color32::BLACK,
            }],
            "brush size {size}"
        );
    }
}

#[test]
fn test_pencil_stamps_at_each_sample() {
    let mut controller = recording_controller();
    let samples = [pos2(5.0, 0.0), pos2(10.0, 0.0), pos2(15.0, 0.0), pos2(20.0, 0.0)];
    drag(&mut controller, Tool::Pencil, pos2(0.0, 0.0), &samples);

    let origins: Vec<_> = controller
        .committed()
        .unwrap()
        .calls
        .iter()
        .map(|call| match call {
            DrawCall::FillRect { origin, size, .. } => {
                assert_eq!(*size, Vec2::splat(5.0));
                *origin
            }
            other => panic!("unexpected call {other:?}"),
        })
        .collect();
    assert_eq!(
        origins,
        vec![pos2(0.0, 0.0), pos2(5.0, 0.0), pos2(10.0, 0.0), pos2(15.0, 0.0), pos2(20.0, 0.0)]
    );
    assert!(controller.preview().unwrap().calls.is_empty());
}

#[test]
fn test_preview_is_cleared_before_every_frame() {
    let mut controller = recording_controller();
    controller.select_tool(Tool::Rectangle);
    controller.pointer_down(client(&controller, pos2(10.0, 10.0)));
    controller.pointer_move(client(&controller, pos2(20.0, 30.0)));
    controller.pointer_move(client(&controller, pos2(110.0, 160.0)));

    let preview = &controller.preview().unwrap().calls;
    assert_eq!(
        preview,
        &vec![
            DrawCall::Clear,
            DrawCall::FillRect { origin: pos2(10.0, 10.0), size: Vec2::new(10.0, 20.0), color: Color32::BLACK },
            DrawCall::Clear,
            DrawCall::FillRect { origin: pos2(10.0, 10.0), size: Vec2::new(100.0, 150.0), color: Color32::BLACK },
        ]
    );
    assert!(controller.committed().unwrap().calls.is_empty());
}

#[test]
fn test_release_commits_last_frame_then_clears_preview() {
    let mut controller = recording_controller();
    drag(&mut controller, Tool::Rectangle, pos2(10.0, 10.0), &[pos2(110.0, 160.0)]);

    assert_eq!(
        controller.committed().unwrap().calls,
        vec![DrawCall::FillRect { origin: pos2(10.0, 10.0), size: Vec2::new(100.0, 150.0), color: Color32::BLACK }]
    );
    let preview = controller.preview().unwrap();
    assert_eq!(preview.calls.last(), Some(&DrawCall::Clear));
    assert!(preview.since_last_clear().is_empty());
}

#[test]
fn test_circle_preview_centered_on_anchor() {
    let mut controller = recording_controller();
    controller.select_tool(Tool::Circle);
    controller.pointer_down(client(&controller, pos2(50.0, 50.0)));
    controller.pointer_move(client(&controller, pos2(50.0, 250.0)));

    assert_eq!(
        controller.preview().unwrap().since_last_clear(),
        &[DrawCall::FillCircle { center: pos2(50.0, 50.0), radius: 150.0, color: Color32::BLACK }]
    );
}

#[test]
fn test_line_preview_uses_brush_width_and_offset_end() {
    let mut controller = recording_controller();
    controller.set_brush_size(4);
    controller.set_brush_color(Color32::RED);
    controller.select_tool(Tool::Line);
    controller.pointer_down(client(&controller, pos2(10.0, 10.0)));
    controller.pointer_move(client(&controller, pos2(50.0, 10.0)));

    assert_eq!(
        controller.preview().unwrap().since_last_clear(),
        &[DrawCall::StrokeLine { from: pos2(10.0, 10.0), to: pos2(52.0, 12.0), width: 4.0, color: Color32::RED }]
    );
}

#[test]
fn test_pointer_tool_makes_no_calls() {
    let mut controller = recording_controller();
    drag(&mut controller, Tool::Pointer, pos2(0.0, 0.0), &[pos2(100.0, 100.0)]);

    assert!(controller.committed().unwrap().calls.is_empty());
    assert!(controller.preview().unwrap().calls.is_empty());
}
