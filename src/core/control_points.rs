//! Kontrollpunkte, Strokes und die append-only Kontrollpunkt-Sammlung.

use glam::{Vec2, Vec3};

/// Ein vom Nutzer platzierter Kontrollpunkt (Weltposition + Farbe).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in Weltkoordinaten (nicht Screen-Space)
    pub position: Vec2,
    /// RGB-Farbe in [0, 1]
    pub color: Vec3,
}

impl ControlPoint {
    /// Standardfarbe neuer Kontrollpunkte (Schwarz).
    pub const DEFAULT_COLOR: Vec3 = Vec3::ZERO;

    /// Erstellt einen Kontrollpunkt mit Standardfarbe.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            color: Self::DEFAULT_COLOR,
        }
    }

    /// Erstellt einen Kontrollpunkt mit expliziter Farbe.
    pub fn with_color(position: Vec2, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Geordnete Folge von Kontrollpunkten, die genau eine Kurve beschreibt.
///
/// Die Einfügereihenfolge bestimmt die Durchlaufrichtung der Kurve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    points: Vec<ControlPoint>,
}

impl Stroke {
    /// Erstellt einen leeren Stroke.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Kontrollpunkt an.
    pub fn push(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    /// Alle Kontrollpunkte in Einfügereihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn der Stroke keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<ControlPoint> for Stroke {
    fn from_iter<I: IntoIterator<Item = ControlPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Append-only Sammlung aller Strokes einer Editier-Session.
///
/// Genau ein Stroke ist aktiv und nimmt neue Punkte auf. Abgeschlossene
/// Strokes bleiben zur Anzeige erhalten und werden nie mehr verändert.
#[derive(Debug, Clone, Default)]
pub struct ControlPointSet {
    completed: Vec<Stroke>,
    active: Stroke,
}

impl ControlPointSet {
    /// Erstellt eine leere Sammlung mit leerem aktivem Stroke.
    pub fn new() -> Self {
        Self {
            completed: Vec::new(),
            active: Stroke::new(),
        }
    }

    /// Hängt einen Punkt an den aktiven Stroke an.
    pub fn append(&mut self, point: ControlPoint) {
        self.active.push(point);
    }

    /// Der aktuell bearbeitete Stroke.
    pub fn active(&self) -> &Stroke {
        &self.active
    }

    /// Alle abgeschlossenen Strokes in Abschlussreihenfolge.
    pub fn completed(&self) -> &[Stroke] {
        &self.completed
    }

    /// Schließt den aktiven Stroke ab und beginnt einen neuen, leeren.
    ///
    /// Gibt eine Referenz auf den soeben abgeschlossenen Stroke zurück.
    pub fn close_active(&mut self) -> &Stroke {
        let closed = std::mem::take(&mut self.active);
        self.completed.push(closed);
        &self.completed[self.completed.len() - 1]
    }

    /// Iteriert über alle Strokes (abgeschlossene zuerst, dann der aktive).
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.completed.iter().chain(std::iter::once(&self.active))
    }

    /// Gesamtzahl aller Kontrollpunkte über alle Strokes.
    pub fn total_points(&self) -> usize {
        self.strokes().map(Stroke::len).sum()
    }
}
