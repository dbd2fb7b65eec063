use crate::app::{AppIntent, UiState};
use crate::core::background_image::IMAGE_EXTENSIONS;

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_image_dialog {
        ui_state.show_image_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bild (PNG/JPEG)", IMAGE_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::ImageSelected {
                path: path.to_string_lossy().into_owned(),
            });
        } else {
            log::debug!("Bild-Dialog ohne Auswahl geschlossen");
        }
    }

    events
}
