use crate::core::{ControlPointSet, Mesh};
use std::sync::Arc;

/// Editier-Zustand: Kontrollpunkte und daraus erzeugte Kurven-Meshes
pub struct EditorState {
    /// Append-only Kontrollpunkte (abgeschlossene Strokes + aktiver Stroke)
    pub control_points: ControlPointSet,
    /// Fertige Kurven als `LineList`-Meshes in Abschlussreihenfolge
    pub curves: Vec<Arc<Mesh>>,
    /// Kontrollpunkte zeichnen
    pub show_control_points: bool,
}

impl EditorState {
    /// Erstellt einen leeren Editier-Zustand (Punkte sichtbar).
    pub fn new() -> Self {
        Self {
            control_points: ControlPointSet::new(),
            curves: Vec::new(),
            show_control_points: true,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
