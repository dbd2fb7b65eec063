use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

fn collect_with_key(key: egui::Key) -> Vec<AppIntent> {
    collect_with_key_event(key_event(key, egui::Modifiers::default()))
}

#[test]
fn test_enter_finalizes_open_curve() {
    let events = collect_with_key(egui::Key::Enter);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::FinalizeOpenCurveRequested)));
}

#[test]
fn test_l_closes_loop() {
    let events = collect_with_key(egui::Key::L);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::FinalizeClosedLoopRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::FinalizeOpenCurveRequested)));
}

#[test]
fn test_p_toggles_control_points() {
    let events = collect_with_key(egui::Key::P);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ToggleControlPointsRequested)));
}

#[test]
fn test_num3_selects_inverted_style() {
    let events = collect_with_key(egui::Key::Num3);

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::ImageStyleChanged {
            style: ImageStyle::Inverted
        }
    )));
}

#[test]
fn test_ctrl_o_opens_image_dialog_only() {
    let events = collect_with_key_event(key_event(egui::Key::O, egui::Modifiers::COMMAND));

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::OpenImageRequested)));
    assert_eq!(events.len(), 1);
}

#[test]
fn test_ctrl_l_does_not_close_loop() {
    let events = collect_with_key_event(key_event(egui::Key::L, egui::Modifiers::COMMAND));

    assert!(events.is_empty());
}

#[test]
fn test_arrow_up_pans_towards_negative_y() {
    let events = collect_with_key(egui::Key::ArrowUp);

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::CameraPanStepRequested { direction } if *direction == glam::Vec2::NEG_Y
    )));
}

#[test]
fn test_home_resets_camera_and_minus_zooms_out() {
    let home = collect_with_key(egui::Key::Home);
    let minus = collect_with_key(egui::Key::Minus);

    assert!(home
        .iter()
        .any(|event| matches!(event, AppIntent::ResetCameraRequested)));
    assert!(minus
        .iter()
        .any(|event| matches!(event, AppIntent::ZoomOutRequested)));
}

#[test]
fn test_unbound_key_emits_nothing() {
    let events = collect_with_key(egui::Key::Q);

    assert!(events.is_empty());
}
