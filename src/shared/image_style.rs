//! Darstellungsstil der Bildebene (shared zwischen App und Renderer).

/// Farbfilter, den der Fragment-Shader auf die Bildtextur anwendet.
///
/// Wirkt nur auf die texturierte Bildebene, nicht auf Punkte oder Kurven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStyle {
    /// Unverändertes Bild
    #[default]
    Original,
    /// Luminanz-Graustufen
    Grayscale,
    /// Invertierte Farben
    Inverted,
    /// Sepia-Tönung
    Sepia,
}

impl ImageStyle {
    /// Alle Stile in Menü-Reihenfolge (Tasten 1–4).
    pub const ALL: [ImageStyle; 4] = [
        ImageStyle::Original,
        ImageStyle::Grayscale,
        ImageStyle::Inverted,
        ImageStyle::Sepia,
    ];

    /// Index für den Shader-Uniform.
    pub fn shader_index(self) -> u32 {
        match self {
            ImageStyle::Original => 0,
            ImageStyle::Grayscale => 1,
            ImageStyle::Inverted => 2,
            ImageStyle::Sepia => 3,
        }
    }

    /// Stil zur Zifferntaste 1–4.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1..=4 => Some(Self::ALL[usize::from(digit - 1)]),
            _ => None,
        }
    }

    /// Anzeigename für Menü und Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            ImageStyle::Original => "Original",
            ImageStyle::Grayscale => "Graustufen",
            ImageStyle::Inverted => "Invertiert",
            ImageStyle::Sepia => "Sepia",
        }
    }
}
