//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use super::ImageStyle;
use crate::core::{AssembledScene, Camera2D, PrimitiveKind};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Zusammengebaute Mesh-Gruppen in Zeichenreihenfolge
    pub scene: Arc<AssembledScene>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Farbfilter der Bildebene
    pub image_style: ImageStyle,
    /// Kontrollpunkte anzeigen
    pub show_control_points: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Bildebene gezeichnet werden soll.
    pub fn has_image(&self) -> bool {
        self.scene
            .groups_of(PrimitiveKind::TriangleList)
            .next()
            .is_some()
    }
}
