//! Fehlertypen des Kurven-Kerns.

use super::CurveMode;
use thiserror::Error;

/// Validierungsfehler beim Abschließen eines Strokes zu einer Kurve.
///
/// Wird an den Aufrufer gemeldet; die Editier-Session bleibt unverändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Zu wenige Kontrollpunkte für den gewählten Kurvenmodus
    #[error("{mode} benötigt mindestens {required} Kontrollpunkte, vorhanden: {actual}")]
    NotEnoughControlPoints {
        /// Angeforderter Modus (offen / geschlossen)
        mode: CurveMode,
        /// Mindestanzahl für diesen Modus
        required: usize,
        /// Tatsächliche Anzahl im aktiven Stroke
        actual: usize,
    },
}

/// Invarianten-Verletzung eines `Mesh` (Programmierfehler, nicht recoverable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Positions-, Farb- und Texturkoordinaten-Sequenzen sind nicht gleich lang
    #[error(
        "Mesh-Sequenzen ungleich lang: {positions} Positionen, {colors} Farben, {tex_coords} Texturkoordinaten"
    )]
    LengthMismatch {
        /// Anzahl Positionen
        positions: usize,
        /// Anzahl Farben
        colors: usize,
        /// Anzahl Texturkoordinaten
        tex_coords: usize,
    },
}
