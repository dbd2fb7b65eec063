use crate::app::CommandLog;
use crate::shared::EditorOptions;

use super::{EditorState, UiState, ViewState};

/// Hauptzustand der Anwendung (eine Editier-Session)
pub struct AppState {
    /// View-State (Kamera, Viewport, Hintergrundbild)
    pub view: ViewState,
    /// UI-State (Dialog-Flags, Statusmeldung)
    pub ui: UiState,
    /// Kontrollpunkte und fertige Kurven
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Schrittweite)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            view: ViewState::new(),
            ui: UiState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl der Punkte im aktiven Stroke (für UI-Anzeige)
    pub fn active_point_count(&self) -> usize {
        self.editor.control_points.active().len()
    }

    /// Anzahl fertiger Kurven (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.editor.curves.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
