//! Zentrale Konfiguration für den Catmull-Rom-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurven ──────────────────────────────────────────────────────────

/// Schrittweite im Parameterraum beim Abtasten (200 Samples pro Segment).
pub const CURVE_SAMPLE_STEP: f32 = 0.005;

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Farbe neu platzierter Kontrollpunkte (RGB: Schwarz).
pub const CONTROL_POINT_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
/// Darstellungsgröße der Kontrollpunkte in Screen-Pixeln (Durchmesser).
pub const CONTROL_POINT_SIZE_PX: f32 = 8.0;

// ── Hintergrund ─────────────────────────────────────────────────────

/// Clear-Color hinter der Szene (RGB: Dunkelgrau).
pub const CLEAR_COLOR: [f32; 3] = [0.15, 0.15, 0.15];

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 50.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;
/// Pan-Schritt per Pfeiltaste in Screen-Pixeln.
pub const PAN_STEP_PX: f32 = 40.0;

/// Name der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "catmull_rom_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `catmull_rom_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurven ──────────────────────────────────────────────────
    /// Schrittweite im Parameterraum (wird auf ein ganzzahliges Raster gerundet)
    pub curve_sample_step: f32,

    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Farbe neu platzierter Kontrollpunkte (RGB)
    pub control_point_color: [f32; 3],
    /// Punktgröße in Screen-Pixeln
    pub control_point_size_px: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Hintergrundfarbe hinter der Szene (RGB)
    pub clear_color: [f32; 3],

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Pan-Schritt per Pfeiltaste in Screen-Pixeln
    pub pan_step_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_sample_step: CURVE_SAMPLE_STEP,

            control_point_color: CONTROL_POINT_COLOR,
            control_point_size_px: CONTROL_POINT_SIZE_PX,

            clear_color: CLEAR_COLOR,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            pan_step_px: PAN_STEP_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        use anyhow::Context;

        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("catmull_rom_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Farbe neuer Kontrollpunkte als `Vec3`.
    pub fn control_point_color_vec(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.control_point_color)
    }
}
