/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Bild-Öffnen-Dialog im nächsten Frame anzeigen
    pub show_image_dialog: bool,
    /// Letzte Meldung für die Statusleiste
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            show_image_dialog: false,
            status_message: None,
        }
    }
}
