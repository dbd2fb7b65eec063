use crate::shared::ImageStyle;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick in den Viewport (bereits in Weltkoordinaten umgerechnet)
    ViewportClicked { world_pos: glam::Vec2 },
    /// Aktiven Stroke als offene Kurve abschließen (Enter)
    FinalizeOpenCurveRequested,
    /// Aktiven Stroke als geschlossene Schleife abschließen (L)
    FinalizeClosedLoopRequested,
    /// Sichtbarkeit der Kontrollpunkte umschalten (P)
    ToggleControlPointsRequested,
    /// Farbfilter der Bildebene wählen (1–4)
    ImageStyleChanged { style: ImageStyle },

    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera um einen Tastatur-Schritt verschieben (Screen-Richtung, y nach unten)
    CameraPanStepRequested { direction: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Bild öffnen (zeigt Dateidialog)
    OpenImageRequested,
    /// Bilddatei wurde im Dialog oder per Kommandozeile gewählt
    ImageSelected { path: String },
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
