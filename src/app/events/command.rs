use crate::shared::ImageStyle;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kontrollpunkt an Weltposition an den aktiven Stroke anhängen
    AppendControlPoint { world_pos: glam::Vec2 },
    /// Aktiven Stroke als offene Kurve abtasten und abschließen
    FinalizeOpenCurve,
    /// Aktiven Stroke als geschlossene Schleife abtasten und abschließen
    FinalizeClosedLoop,
    /// Kontrollpunkte ein-/ausblenden
    ToggleControlPointVisibility,
    /// Farbfilter der Bildebene setzen
    SetImageStyle { style: ImageStyle },

    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    /// Bild-Dialog anfordern
    RequestImageDialog,
    /// Hintergrundbild laden
    LoadImage { path: String },
    /// Optionen speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}
