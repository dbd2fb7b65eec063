//! Use-Case-Funktionen für das Hintergrundbild.

use crate::app::AppState;
use crate::core::BackgroundImage;
use anyhow::Result;
use std::sync::Arc;

/// Öffnet den Bild-Auswahl-Dialog.
pub fn request_image_dialog(state: &mut AppState) {
    state.ui.show_image_dialog = true;
}

/// Lädt ein Hintergrundbild von einem Dateipfad.
///
/// Bei Erfolg wird der GPU-Upload für den nächsten Frame angefordert.
pub fn load_image(state: &mut AppState, path: String) -> Result<()> {
    log::info!("Lade Hintergrundbild: {}", path);

    let image = BackgroundImage::load_from_file(&path)?;
    let (width, height) = image.dimensions();

    state.view.background_image = Some(Arc::new(image));
    state.view.background_dirty = true;
    state.ui.status_message = Some(format!("Bild geladen: {}x{} Pixel", width, height));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_image_dialog_sets_flag() {
        let mut state = AppState::new();

        request_image_dialog(&mut state);

        assert!(state.ui.show_image_dialog);
    }

    #[test]
    fn load_missing_image_keeps_state() {
        let mut state = AppState::new();

        let result = load_image(&mut state, "/gibt/es/nicht.png".to_string());

        assert!(result.is_err());
        assert!(state.view.background_image.is_none());
        assert!(!state.view.background_dirty);
    }

    #[test]
    fn load_image_marks_background_dirty() {
        let path = std::env::temp_dir().join("catmull_rom_editor_use_case_bg.png");
        image::DynamicImage::new_rgb8(4, 2)
            .save(&path)
            .expect("PNG schreiben");

        let mut state = AppState::new();
        load_image(&mut state, path.to_string_lossy().into_owned()).expect("Laden");

        assert!(state.view.background_dirty);
        assert_eq!(
            state.view.background_image.as_ref().map(|i| i.dimensions()),
            Some((4, 2))
        );

        let _ = std::fs::remove_file(&path);
    }
}
