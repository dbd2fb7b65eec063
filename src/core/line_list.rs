//! Umwandlung einer Punktfolge in Linien-Paare für `LineList`-Topologie.

use super::basis::SampledCurvePoint;
use super::{Mesh, SampledCurve};
use glam::Vec2;

/// Expandiert eine geordnete Punktfolge `s0, s1, ..., s(K-1)` zu
/// `s0, s1, s1, s2, ..., s(K-2), s(K-1)`.
///
/// Jeder innere Punkt wird verdoppelt, damit je zwei aufeinanderfolgende
/// Einträge ein eigenständiges Liniensegment bilden. Ergebnis: `2K - 2`
/// Punkte, leer für `K < 2`.
pub fn expand_to_line_list(samples: &[SampledCurvePoint]) -> Vec<SampledCurvePoint> {
    if samples.len() < 2 {
        return Vec::new();
    }

    let mut expanded = Vec::with_capacity(2 * samples.len() - 2);
    for pair in samples.windows(2) {
        expanded.push(pair[0]);
        expanded.push(pair[1]);
    }
    expanded
}

/// Baut aus einer abgetasteten Kurve das `LineList`-Mesh (Textur-Koordinaten 0).
pub fn line_list_mesh(curve: &SampledCurve) -> Mesh {
    let expanded = expand_to_line_list(curve.points());
    let mut mesh = Mesh::with_capacity(expanded.len());
    for sample in &expanded {
        mesh.push_vertex(sample.position, sample.color, Vec2::ZERO);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn sample(x: f32) -> SampledCurvePoint {
        SampledCurvePoint {
            position: Vec2::new(x, 0.0),
            color: Vec3::ZERO,
        }
    }

    #[test]
    fn test_three_samples_expand_to_four() {
        let input = [sample(0.0), sample(1.0), sample(2.0)];
        let xs: Vec<f32> = expand_to_line_list(&input)
            .iter()
            .map(|s| s.position.x)
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_expanded_count_is_two_k_minus_two() {
        let input: Vec<SampledCurvePoint> = (0..200).map(|i| sample(i as f32)).collect();
        assert_eq!(expand_to_line_list(&input).len(), 398);
    }

    #[test]
    fn test_line_list_mesh_from_sampled_curve() {
        use crate::core::{ControlPoint, CurveMode, CurveSampler, Stroke};

        let stroke: Stroke = [(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)]
            .iter()
            .map(|&(x, y)| ControlPoint::new(Vec2::new(x, y)))
            .collect();
        let curve = CurveSampler::default()
            .sample(&stroke, CurveMode::Open)
            .expect("gültiger Stroke");

        let mesh = line_list_mesh(&curve);
        assert_eq!(mesh.vertex_count(), 398);
        assert!(mesh.validate().is_ok());
        assert!(mesh.positions().iter().all(|p| p.z == 1.0));
    }

    #[test]
    fn test_fewer_than_two_samples_give_empty_output() {
        assert!(expand_to_line_list(&[]).is_empty());
        assert!(expand_to_line_list(&[sample(1.0)]).is_empty());
    }
}
