//! Catmull-Rom-Basisauswertung über die feste Blending-Matrix.
//!
//! Position und Farbe eines Kurvenpunkts ergeben sich aus `T · M · C`:
//! `T = [t³, t², t, 1]`, `M` ist die Catmull-Rom-Matrix (Faktor 0.5),
//! `C` enthält pro Zeile einen der vier Kontrollpunkte.

use super::ControlPoint;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Catmull-Rom-Blending-Matrix (ohne den Faktor 0.5).
///
/// Spalte `j` enthält die kubischen Koeffizienten `[t³, t², t, 1]`
/// des Gewichts für Kontrollpunkt `p_j`.
pub const CATMULL_ROM_BASIS: Mat4 = Mat4::from_cols_array_2d(&[
    [-1.0, 2.0, -1.0, 0.0],
    [3.0, -5.0, 0.0, 2.0],
    [-3.0, 4.0, 1.0, 0.0],
    [1.0, -1.0, 0.0, 0.0],
]);

/// Skalierungsfaktor der Basis-Matrix.
pub const CATMULL_ROM_SCALE: f32 = 0.5;

/// Ein abgetasteter Kurvenpunkt (Weltposition + interpolierte Farbe).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledCurvePoint {
    /// Position in Weltkoordinaten
    pub position: Vec2,
    /// Interpolierte RGB-Farbe
    pub color: Vec3,
}

/// Berechnet die vier Blending-Gewichte `[w0, w1, w2, w3]` für den lokalen Parameter `t`.
pub fn blending_weights(t: f32) -> Vec4 {
    let t_values = CATMULL_ROM_SCALE * Vec4::new(t * t * t, t * t, t, 1.0);
    // Zeilenvektor · Matrix: w_j = T · Spalte_j
    CATMULL_ROM_BASIS.transpose() * t_values
}

/// Wertet das Kurvensegment zwischen `points[1]` und `points[2]` bei `t` aus.
pub fn evaluate(points: [ControlPoint; 4], t: f32) -> SampledCurvePoint {
    let weights = blending_weights(t);

    let xs = Vec4::new(
        points[0].position.x,
        points[1].position.x,
        points[2].position.x,
        points[3].position.x,
    );
    let ys = Vec4::new(
        points[0].position.y,
        points[1].position.y,
        points[2].position.y,
        points[3].position.y,
    );
    let reds = Vec4::new(
        points[0].color.x,
        points[1].color.x,
        points[2].color.x,
        points[3].color.x,
    );
    let greens = Vec4::new(
        points[0].color.y,
        points[1].color.y,
        points[2].color.y,
        points[3].color.y,
    );
    let blues = Vec4::new(
        points[0].color.z,
        points[1].color.z,
        points[2].color.z,
        points[3].color.z,
    );

    SampledCurvePoint {
        position: Vec2::new(weights.dot(xs), weights.dot(ys)),
        color: Vec3::new(weights.dot(reds), weights.dot(greens), weights.dot(blues)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cp(x: f32, y: f32) -> ControlPoint {
        ControlPoint::new(Vec2::new(x, y))
    }

    #[test]
    fn test_weights_match_catmull_rom_polynomials() {
        for &t in &[0.0f32, 0.25, 0.5, 0.8, 1.0] {
            let w = blending_weights(t);
            let (t2, t3) = (t * t, t * t * t);
            assert_relative_eq!(w.x, 0.5 * (-t3 + 2.0 * t2 - t), epsilon = 1e-6);
            assert_relative_eq!(w.y, 0.5 * (3.0 * t3 - 5.0 * t2 + 2.0), epsilon = 1e-6);
            assert_relative_eq!(w.z, 0.5 * (-3.0 * t3 + 4.0 * t2 + t), epsilon = 1e-6);
            assert_relative_eq!(w.w, 0.5 * (t3 - t2), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let w = blending_weights(t);
            assert_relative_eq!(w.x + w.y + w.z + w.w, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_evaluate_interpolates_inner_points() {
        let points = [cp(0.0, 0.0), cp(1.0, 1.0), cp(2.0, 1.0), cp(3.0, 0.0)];

        let start = evaluate(points, 0.0);
        assert_eq!(start.position, Vec2::new(1.0, 1.0));

        let end = evaluate(points, 1.0);
        assert_relative_eq!(end.position.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(end.position.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_evaluate_on_collinear_points_stays_on_line() {
        let points = [cp(0.0, 0.0), cp(1.0, 0.0), cp(2.0, 0.0), cp(3.0, 0.0)];
        let mid = evaluate(points, 0.5);
        assert_relative_eq!(mid.position.x, 1.5, epsilon = 1e-6);
        assert_relative_eq!(mid.position.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_evaluate_interpolates_color() {
        let red = Vec3::new(1.0, 0.0, 0.0);
        let blue = Vec3::new(0.0, 0.0, 1.0);
        let points = [
            ControlPoint::with_color(Vec2::ZERO, red),
            ControlPoint::with_color(Vec2::X, red),
            ControlPoint::with_color(Vec2::Y, blue),
            ControlPoint::with_color(Vec2::ONE, blue),
        ];

        assert_eq!(evaluate(points, 0.0).color, red);
        let mid = evaluate(points, 0.5).color;
        assert_relative_eq!(mid.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(mid.z, 0.5, epsilon = 1e-6);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-6);
    }
}
