use crate::core::{BackgroundImage, Camera2D};
use crate::shared::ImageStyle;
use std::sync::Arc;

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Hintergrundbild (optional)
    pub background_image: Option<Arc<BackgroundImage>>,
    /// Signalisiert, dass das Hintergrundbild neu in den GPU-Renderer hochgeladen werden muss
    pub background_dirty: bool,
    /// Farbfilter der Bildebene
    pub image_style: ImageStyle,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            background_image: None,
            background_dirty: false,
            image_style: ImageStyle::Original,
        }
    }
}
