//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use crate::shared::ImageStyle;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Setzt den Farbfilter der Bildebene.
pub fn set_image_style(state: &mut AppState, style: ImageStyle) {
    state.view.image_style = style;
    log::info!("Bildstil: {}", style.label());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
    }

    #[test]
    fn set_image_style_updates_style() {
        let mut state = AppState::new();
        assert_eq!(state.view.image_style, ImageStyle::Original);

        set_image_style(&mut state, ImageStyle::Grayscale);

        assert_eq!(state.view.image_style, ImageStyle::Grayscale);
    }
}
