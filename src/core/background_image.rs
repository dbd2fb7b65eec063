//! Hintergrundbild-Loader: dekodiertes Bild plus Pixelmaße für die Bildebene.

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::BufReader;
use std::path::Path;

use super::ImageExtents;

/// Bekannte Bild-Endungen für den Datei-Dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Dekodiertes Hintergrundbild.
pub struct BackgroundImage {
    image_data: DynamicImage,
    source_label: String,
}

impl BackgroundImage {
    /// Lädt ein Hintergrundbild aus einer Datei (PNG, JPG, JPEG).
    ///
    /// Ohne bekannte Endung, oder wenn die Erkennung über die Endung fehlschlägt,
    /// wird das Format anhand der Magic Bytes im Dateiinhalt bestimmt.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        let image = if is_image_filename(&file_name) {
            match image::open(path) {
                Ok(img) => img,
                Err(ext_err) => {
                    log::warn!(
                        "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                        path.display(),
                        ext_err
                    );
                    Self::decode_by_content(path)?
                }
            }
        } else {
            log::debug!(
                "'{}' hat keine bekannte Bild-Endung, Format wird aus dem Inhalt bestimmt",
                path.display()
            );
            Self::decode_by_content(path)?
        };

        Ok(Self::from_image(image, &path.display().to_string()))
    }

    fn decode_by_content(path: &Path) -> Result<DynamicImage> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Datei nicht gefunden: {}", path.display()))?;
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", path.display()))?;
        reader
            .decode()
            .with_context(|| format!("Fehler beim Dekodieren des Bildes: {}", path.display()))
    }

    /// Erstellt ein Hintergrundbild aus einem bereits dekodierten Bild.
    pub fn from_image(image: DynamicImage, source_label: &str) -> Self {
        let (width, height) = image.dimensions();
        log::info!(
            "Hintergrundbild geladen: {}x{} Pixel von '{}'",
            width,
            height,
            source_label
        );
        Self {
            image_data: image,
            source_label: source_label.to_string(),
        }
    }

    /// Gibt die Bilddaten zurück
    pub fn image_data(&self) -> &DynamicImage {
        &self.image_data
    }

    /// Herkunft des Bildes (Pfad) für Statusanzeige und Logs.
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Gibt die Dimensionen des Bildes zurück
    pub fn dimensions(&self) -> (u32, u32) {
        self.image_data.dimensions()
    }

    /// Pixelmaße für den Szenen-Zusammenbau.
    pub fn extents(&self) -> ImageExtents {
        let (width, height) = self.dimensions();
        ImageExtents::new(width, height)
    }
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.dimensions();
        f.debug_struct("BackgroundImage")
            .field("source", &self.source_label)
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}

/// Prüft ob ein Dateiname eine bekannte Bild-Endung hat.
pub fn is_image_filename(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}
