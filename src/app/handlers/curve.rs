//! Handler für Kontrollpunkte und Kurvenabschluss.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveMode;

/// Hängt einen Kontrollpunkt an den aktiven Stroke an.
pub fn append_control_point(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::curve_editing::append_control_point(state, world_pos);
}

/// Schließt den aktiven Stroke im gegebenen Modus ab.
///
/// Validierungsfehler werden geloggt und in der Statusleiste angezeigt;
/// die Session läuft unverändert weiter.
pub fn finalize(state: &mut AppState, mode: CurveMode) {
    match use_cases::curve_editing::finalize_active_stroke(state, mode) {
        Ok(_) => {
            state.ui.status_message = Some(format!(
                "{} erstellt ({} Kurven gesamt)",
                mode,
                state.curve_count()
            ));
        }
        Err(e) => {
            log::warn!("Kurve nicht erstellt: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

/// Schaltet die Sichtbarkeit der Kontrollpunkte um.
pub fn toggle_control_point_visibility(state: &mut AppState) {
    use_cases::curve_editing::toggle_control_point_visibility(state);
}
