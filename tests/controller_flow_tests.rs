use catmull_rom_editor::shared::ImageStyle;
use catmull_rom_editor::{AppCommand, AppController, AppIntent, AppState, PrimitiveKind};

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::ViewportClicked {
                world_pos: glam::Vec2::new(x, y),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

#[test]
fn test_open_curve_flow_builds_line_list() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for (x, y) in [(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)] {
        click(&mut controller, &mut state, x, y);
    }
    assert_eq!(state.active_point_count(), 4);

    controller
        .handle_intent(&mut state, AppIntent::FinalizeOpenCurveRequested)
        .expect("Abschluss sollte ohne Fehler durchlaufen");

    assert_eq!(state.curve_count(), 1);
    assert_eq!(state.active_point_count(), 0);
    assert_eq!(state.editor.curves[0].vertex_count(), 398);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::FinalizeOpenCurve)
    ));

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    assert_eq!(scene.scene.vertex_count_of(PrimitiveKind::LineList), 398);
    assert_eq!(scene.scene.vertex_count_of(PrimitiveKind::PointList), 4);
    assert!(!scene.has_image());
}

#[test]
fn test_closed_loop_flow_builds_line_list() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)] {
        click(&mut controller, &mut state, x, y);
    }

    controller
        .handle_intent(&mut state, AppIntent::FinalizeClosedLoopRequested)
        .expect("Abschluss sollte ohne Fehler durchlaufen");

    assert_eq!(state.curve_count(), 1);
    assert_eq!(state.editor.curves[0].vertex_count(), 1200);
}

#[test]
fn test_open_finalize_with_two_points_keeps_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 1.0, 1.0);

    controller
        .handle_intent(&mut state, AppIntent::FinalizeOpenCurveRequested)
        .expect("Validierungsfehler darf die Session nicht beenden");

    assert_eq!(state.curve_count(), 0);
    assert_eq!(state.active_point_count(), 2);
    assert!(state.editor.control_points.completed().is_empty());
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_points_after_finalize_start_new_stroke() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)] {
        click(&mut controller, &mut state, x, y);
    }
    controller
        .handle_intent(&mut state, AppIntent::FinalizeClosedLoopRequested)
        .expect("Abschluss");

    click(&mut controller, &mut state, 2.0, 2.0);

    assert_eq!(state.editor.control_points.completed().len(), 1);
    assert_eq!(state.active_point_count(), 1);
    assert_eq!(state.editor.control_points.total_points(), 4);

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    assert_eq!(scene.scene.groups_of(PrimitiveKind::PointList).count(), 2);
}

#[test]
fn test_toggle_control_points_hides_points_in_render_scene() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(state.editor.show_control_points);

    controller
        .handle_intent(&mut state, AppIntent::ToggleControlPointsRequested)
        .expect("Toggle");

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    assert!(!scene.show_control_points);
}

#[test]
fn test_image_style_change_is_logged_once() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..2 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ImageStyleChanged {
                    style: ImageStyle::Grayscale,
                },
            )
            .expect("Stilwechsel");
    }

    assert_eq!(state.view.image_style, ImageStyle::Grayscale);
    let style_commands = state
        .command_log
        .entries()
        .iter()
        .filter(|c| matches!(c, AppCommand::SetImageStyle { .. }))
        .count();
    assert_eq!(style_commands, 1);
}

#[test]
fn test_image_selected_loads_image_and_resets_camera() {
    let path = std::env::temp_dir().join("catmull_rom_editor_flow_test.png");
    image::DynamicImage::new_rgb8(200, 100)
        .save(&path)
        .expect("PNG schreiben");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.camera.look_at(glam::Vec2::new(3.0, 3.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImageSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("Bild sollte laden");

    assert!(state.view.background_image.is_some());
    assert!(state.view.background_dirty);
    assert_eq!(state.view.camera.position, glam::Vec2::ZERO);

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    assert!(scene.has_image());
    assert_eq!(scene.scene.vertex_count_of(PrimitiveKind::TriangleList), 6);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_image_returns_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ImageSelected {
            path: "/nicht/vorhanden.png".to_string(),
        },
    );

    assert!(result.is_err());
    assert!(state.view.background_image.is_none());
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
}

#[test]
fn test_zoom_in_respects_configured_maximum() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.camera_zoom_max = 2.0;

    for _ in 0..20 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomInRequested)
            .expect("Zoom");
    }

    assert!(state.view.camera.zoom <= 2.0 + f32::EPSILON);
}
