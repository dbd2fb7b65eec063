//! 2D-Kamera für Pan und Zoom über der Bildebene.

use glam::{Mat3, Vec2};

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0 (Bildebene reicht bis ±1, etwas Rand).
    pub const BASE_WORLD_EXTENT: f32 = 1.1;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 50.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der Standard-Grenzen
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Gibt die View-Matrix zurück (für Shader)
    /// Enthält nur die Translation. Zoom wird ausschließlich über die Projektion gesteuert.
    pub fn view_matrix(&self) -> Mat3 {
        Mat3::from_translation(-self.position)
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    ///
    /// Inverse der Pan/Zoom-Transformation: Ein Klick landet dort in der Welt,
    /// wo er auf dem Bildschirm zu sehen war, unabhängig von Zoom und Pan.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let screen_size = screen_size.max(Vec2::ONE);
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen_pos / screen_size) * 2.0 - Vec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        // Y nicht negieren – die Projektion flippt Y bereits (bottom=+, top=-)
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
