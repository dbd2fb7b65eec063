//! Abtastung eines Strokes zu einer dichten Catmull-Rom-Punktfolge.
//!
//! Der ganzzahlige Anteil der Parameterposition wählt die Vierer-Nachbarschaft,
//! der gebrochene Anteil ist das lokale `t` der Basisauswertung.
//!
//! Wichtig bei offenen Kurven: Mit der verwendeten Indizierung wirken der
//! erste und der letzte Kontrollpunkt ausschließlich als Tangenten-Anker.
//! Die Kurve beginnt bei `points[1]` und endet bei `points[N-2]`. Das ist
//! Eigenschaft des Verfahrens, kein Off-by-one.

use super::basis::{self, SampledCurvePoint};
use super::{CurveError, Stroke};
use std::fmt;

/// Kurvenmodus beim Abschließen eines Strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveMode {
    /// Offene Kurve: `loop_max = N - 3`, keine Index-Umläufe
    Open,
    /// Geschlossene Schleife: `loop_max = N`, Indizes laufen modulo N um
    Closed,
}

impl CurveMode {
    /// Minimale Anzahl Kontrollpunkte, ab der abgetastet werden darf.
    pub fn min_control_points(self) -> usize {
        match self {
            CurveMode::Open => 4,
            CurveMode::Closed => 3,
        }
    }

    /// Anzahl der Kurvensegmente (ganzzahliger Parameterbereich) für `n` Punkte.
    ///
    /// Open: `n - 3`, Closed: `n`. Liefert 0 bei zu wenigen Punkten.
    pub fn loop_max(self, n: usize) -> usize {
        match self {
            CurveMode::Open => n.saturating_sub(3),
            CurveMode::Closed => n,
        }
    }

    /// Bestimmt die Vierer-Nachbarschaft für Segment `segment` bei `n` Punkten.
    pub fn neighborhood(self, segment: usize, n: usize) -> Neighborhood {
        match self {
            CurveMode::Closed => {
                let p1 = segment % n;
                let p2 = (p1 + 1) % n;
                let p3 = (p2 + 1) % n;
                let p0 = if p1 == 0 { n - 1 } else { p1 - 1 };
                Neighborhood { p0, p1, p2, p3 }
            }
            CurveMode::Open => {
                let p1 = segment + 1;
                Neighborhood {
                    p0: p1 - 1,
                    p1,
                    p2: p1 + 1,
                    p3: p1 + 2,
                }
            }
        }
    }
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveMode::Open => write!(f, "Offene Kurve"),
            CurveMode::Closed => write!(f, "Geschlossene Schleife"),
        }
    }
}

/// Indizes der vier Kontrollpunkte eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    /// Vorgänger (Tangenten-Nachbar)
    pub p0: usize,
    /// Segmentanfang
    pub p1: usize,
    /// Segmentende
    pub p2: usize,
    /// Nachfolger (Tangenten-Nachbar)
    pub p3: usize,
}

/// Ergebnis einer Abtastung: geordnete Kurvenpunkte in Parameterreihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    mode: CurveMode,
    points: Vec<SampledCurvePoint>,
}

impl SampledCurve {
    /// Modus, mit dem die Kurve erzeugt wurde.
    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    /// Alle Abtastpunkte.
    pub fn points(&self) -> &[SampledCurvePoint] {
        &self.points
    }

    /// Anzahl der Abtastpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte abgetastet wurden.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Treibt die Basisauswertung über den Parameterbereich eines Strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSampler {
    samples_per_segment: usize,
}

impl CurveSampler {
    /// Standard-Schrittweite im Parameterraum.
    pub const DEFAULT_STEP: f32 = 0.005;

    /// Kleinste zulässige Schrittweite (100 000 Samples pro Segment).
    pub const MIN_STEP: f32 = 1.0e-5;

    /// Erstellt einen Sampler mit gegebener Schrittweite.
    ///
    /// Die Schrittweite wird auf ein ganzzahliges Raster pro Segment gerundet
    /// (`round(1 / step)` Samples), damit sich keine Gleitkomma-Drift aufsummiert.
    /// Ungültige Werte (NaN, > 1 oder kleiner als `MIN_STEP`) fallen auf
    /// `DEFAULT_STEP` zurück.
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() && (Self::MIN_STEP..=1.0).contains(&step) {
            step
        } else {
            log::warn!(
                "Ungültige Sample-Schrittweite {}, verwende {}",
                step,
                Self::DEFAULT_STEP
            );
            Self::DEFAULT_STEP
        };
        let samples_per_segment = ((1.0 / step).round() as usize).max(1);
        Self {
            samples_per_segment,
        }
    }

    /// Anzahl Samples pro ganzzahligem Parameterschritt.
    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    /// Effektive Schrittweite im Parameterraum.
    pub fn step(&self) -> f32 {
        1.0 / self.samples_per_segment as f32
    }

    /// Prüft, ob ein Stroke mit `n` Punkten im Modus `mode` abgetastet werden darf.
    pub fn validate(mode: CurveMode, n: usize) -> Result<(), CurveError> {
        let required = mode.min_control_points();
        if n < required {
            return Err(CurveError::NotEnoughControlPoints {
                mode,
                required,
                actual: n,
            });
        }
        Ok(())
    }

    /// Liefert alle Parameterpositionen `(segment, t)` für `loop_max` Segmente.
    pub fn parameters(&self, loop_max: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        let per_segment = self.samples_per_segment;
        (0..loop_max).flat_map(move |segment| {
            (0..per_segment).map(move |j| (segment, j as f32 / per_segment as f32))
        })
    }

    /// Tastet den Stroke im gegebenen Modus ab.
    ///
    /// Im geschlossenen Modus wird zusätzlich ein Schluss-Sample am Parameterende
    /// (letztes Segment, `t = 1`) angehängt; es fällt mit dem ersten Sample zusammen.
    pub fn sample(&self, stroke: &Stroke, mode: CurveMode) -> Result<SampledCurve, CurveError> {
        let n = stroke.len();
        Self::validate(mode, n)?;

        let points = stroke.points();
        let loop_max = mode.loop_max(n);
        let capacity = loop_max
            .saturating_mul(self.samples_per_segment)
            .saturating_add(usize::from(mode == CurveMode::Closed));
        let mut samples = Vec::with_capacity(capacity);

        let evaluate_at = |segment: usize, t: f32| {
            let hood = mode.neighborhood(segment, n);
            basis::evaluate(
                [
                    points[hood.p0],
                    points[hood.p1],
                    points[hood.p2],
                    points[hood.p3],
                ],
                t,
            )
        };

        for (segment, t) in self.parameters(loop_max) {
            samples.push(evaluate_at(segment, t));
        }

        if mode == CurveMode::Closed {
            samples.push(evaluate_at(loop_max - 1, 1.0));
        }

        log::debug!(
            "{} mit {} Kontrollpunkten abgetastet: {} Samples",
            mode,
            n,
            samples.len()
        );

        Ok(SampledCurve {
            mode,
            points: samples,
        })
    }
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}
