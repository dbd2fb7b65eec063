//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Bild-Dateidialog.
pub fn request_image_dialog(state: &mut AppState) {
    use_cases::background_image::request_image_dialog(state);
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)?;
    state.ui.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}
