//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::shared::ImageStyle;

/// Ziffern-Tasten für die Bildstile (1–4).
const STYLE_KEYS: [(egui::Key, u8); 4] = [
    (egui::Key::Num1, 1),
    (egui::Key::Num2, 2),
    (egui::Key::Num3, 3),
    (egui::Key::Num4, 4),
];

/// Pfeiltasten mit Pan-Richtung in Screen-Koordinaten (y nach unten).
const PAN_KEYS: [(egui::Key, glam::Vec2); 4] = [
    (egui::Key::ArrowLeft, glam::Vec2::NEG_X),
    (egui::Key::ArrowRight, glam::Vec2::X),
    (egui::Key::ArrowUp, glam::Vec2::NEG_Y),
    (egui::Key::ArrowDown, glam::Vec2::Y),
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let modifiers = ui.input(|i| i.modifiers);
    let pressed = |key: egui::Key| ui.input(|i| i.key_pressed(key));

    // Ctrl+O (Bild öffnen)
    if modifiers.command && pressed(egui::Key::O) {
        events.push(AppIntent::OpenImageRequested);
    }

    // Alle übrigen Shortcuts nur ohne Ctrl/Cmd
    if modifiers.command {
        return events;
    }

    if pressed(egui::Key::Enter) {
        events.push(AppIntent::FinalizeOpenCurveRequested);
    }
    if pressed(egui::Key::L) {
        events.push(AppIntent::FinalizeClosedLoopRequested);
    }
    if pressed(egui::Key::P) {
        events.push(AppIntent::ToggleControlPointsRequested);
    }

    for (key, digit) in STYLE_KEYS {
        if pressed(key) {
            if let Some(style) = ImageStyle::from_digit(digit) {
                events.push(AppIntent::ImageStyleChanged { style });
            }
        }
    }

    // '+' liegt je nach Layout auf Plus oder Equals
    if pressed(egui::Key::Plus) || pressed(egui::Key::Equals) {
        events.push(AppIntent::ZoomInRequested);
    }
    if pressed(egui::Key::Minus) {
        events.push(AppIntent::ZoomOutRequested);
    }
    if pressed(egui::Key::Home) {
        events.push(AppIntent::ResetCameraRequested);
    }

    for (key, direction) in PAN_KEYS {
        if pressed(key) {
            events.push(AppIntent::CameraPanStepRequested { direction });
        }
    }

    events
}

#[cfg(test)]
mod tests;
