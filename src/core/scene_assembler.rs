//! Zusammenbau der Szene: Bildebene, Kontrollpunkte und Kurven als Mesh-Gruppen.
//!
//! Reine Datenumwandlung ohne GPU-Zugriff. Der Renderer lädt die Gruppen
//! anschließend in seine Vertex-Buffer.

use super::{ControlPointSet, Mesh, MeshError, PrimitiveKind, Stroke};
use glam::{Vec2, Vec3};
use std::sync::Arc;

/// Pixelmaße des Hintergrundbilds (bestimmen das Seitenverhältnis der Bildebene).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageExtents {
    pub width: u32,
    pub height: u32,
}

impl ImageExtents {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Halbe Ausdehnung der Bildebene in Weltkoordinaten.
    ///
    /// Die längere Bildseite spannt [-1, 1] auf, die kürzere wird
    /// seitenverhältnistreu skaliert.
    pub fn half_size(&self) -> Vec2 {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        let longest = w.max(h);
        Vec2::new(w / longest, h / longest)
    }
}

/// Eine zeichenbare Gruppe: Topologie + gemeinsam genutztes Mesh.
#[derive(Debug, Clone)]
pub struct MeshGroup {
    pub kind: PrimitiveKind,
    pub mesh: Arc<Mesh>,
}

impl MeshGroup {
    pub fn new(kind: PrimitiveKind, mesh: Arc<Mesh>) -> Self {
        Self { kind, mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }
}

/// Alle Gruppen eines Frames in Zeichenreihenfolge.
#[derive(Debug, Clone, Default)]
pub struct AssembledScene {
    pub groups: Vec<MeshGroup>,
}

impl AssembledScene {
    /// Iteriert über alle Gruppen einer bestimmten Topologie.
    pub fn groups_of(&self, kind: PrimitiveKind) -> impl Iterator<Item = &MeshGroup> {
        self.groups.iter().filter(move |g| g.kind == kind)
    }

    /// Gesamtzahl Vertices über alle Gruppen einer Topologie.
    pub fn vertex_count_of(&self, kind: PrimitiveKind) -> usize {
        self.groups_of(kind).map(MeshGroup::vertex_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Baut die Szene in Zeichenreihenfolge: Bildebene, Punkte pro Stroke, Kurven.
///
/// Leere Strokes werden übersprungen. Jede Gruppe wird vor der Rückgabe auf
/// die Längen-Invariante geprüft.
pub fn assemble(
    image: Option<ImageExtents>,
    control_points: &ControlPointSet,
    curves: &[Arc<Mesh>],
) -> Result<AssembledScene, MeshError> {
    let mut groups = Vec::with_capacity(1 + control_points.completed().len() + 1 + curves.len());

    if let Some(extents) = image {
        groups.push(MeshGroup::new(
            PrimitiveKind::TriangleList,
            Arc::new(image_plane(extents)),
        ));
    }

    for stroke in control_points.strokes().filter(|s| !s.is_empty()) {
        groups.push(MeshGroup::new(
            PrimitiveKind::PointList,
            Arc::new(stroke_points_mesh(stroke)),
        ));
    }

    for curve in curves {
        groups.push(MeshGroup::new(PrimitiveKind::LineList, Arc::clone(curve)));
    }

    for group in &groups {
        group.mesh.validate()?;
    }

    Ok(AssembledScene { groups })
}

/// Bildebene als zwei Dreiecke (6 Vertices, weiß, UV mit v = 0 an der Oberkante).
///
/// Weltkoordinaten wachsen wie Screen-Space nach unten, die Oberkante liegt
/// daher bei `y = -half_height`.
pub fn image_plane(extents: ImageExtents) -> Mesh {
    let half = extents.half_size();
    let top_left = (Vec2::new(-half.x, -half.y), Vec2::new(0.0, 0.0));
    let top_right = (Vec2::new(half.x, -half.y), Vec2::new(1.0, 0.0));
    let bottom_left = (Vec2::new(-half.x, half.y), Vec2::new(0.0, 1.0));
    let bottom_right = (Vec2::new(half.x, half.y), Vec2::new(1.0, 1.0));

    let mut mesh = Mesh::with_capacity(6);
    for (position, uv) in [
        top_left,
        bottom_left,
        bottom_right,
        top_left,
        bottom_right,
        top_right,
    ] {
        mesh.push_vertex(position, Vec3::ONE, uv);
    }
    mesh
}

/// Ein Vertex pro Kontrollpunkt, Farbe aus dem Punkt.
pub fn stroke_points_mesh(stroke: &Stroke) -> Mesh {
    let mut mesh = Mesh::with_capacity(stroke.len());
    for point in stroke.points() {
        mesh.push_vertex(point.position, point.color, Vec2::ZERO);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlPoint;
    use approx::assert_relative_eq;

    fn set_with_strokes() -> ControlPointSet {
        let mut set = ControlPointSet::new();
        for i in 0..4 {
            set.append(ControlPoint::new(Vec2::new(i as f32, 0.0)));
        }
        set.close_active();
        set.append(ControlPoint::new(Vec2::ONE));
        set
    }

    #[test]
    fn test_assemble_orders_groups_for_drawing() {
        let set = set_with_strokes();
        let curve = Arc::new(Mesh::from_parts(
            vec![Vec3::ZERO; 4],
            vec![Vec3::ZERO; 4],
            vec![Vec3::ZERO; 4],
        )
        .expect("gleich lange Sequenzen"));

        let scene = assemble(Some(ImageExtents::new(200, 100)), &set, &[curve])
            .expect("Szene gültig");

        let kinds: Vec<PrimitiveKind> = scene.groups.iter().map(|g| g.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PrimitiveKind::TriangleList,
                PrimitiveKind::PointList,
                PrimitiveKind::PointList,
                PrimitiveKind::LineList,
            ]
        );
        assert_eq!(scene.vertex_count_of(PrimitiveKind::PointList), 5);
        assert_eq!(scene.vertex_count_of(PrimitiveKind::TriangleList), 6);
    }

    #[test]
    fn test_assemble_skips_empty_strokes_and_missing_image() {
        let mut set = ControlPointSet::new();
        set.append(ControlPoint::new(Vec2::ZERO));
        set.close_active();

        let scene = assemble(None, &set, &[]).expect("Szene gültig");
        assert_eq!(scene.groups.len(), 1);
        assert_eq!(scene.groups[0].kind, PrimitiveKind::PointList);
    }

    #[test]
    fn test_every_group_keeps_sequences_parallel() {
        let set = set_with_strokes();
        let scene = assemble(Some(ImageExtents::new(64, 64)), &set, &[]).expect("Szene gültig");
        for group in &scene.groups {
            let mesh = &group.mesh;
            assert_eq!(mesh.positions().len(), mesh.colors().len());
            assert_eq!(mesh.positions().len(), mesh.tex_coords().len());
        }
    }

    #[test]
    fn test_image_plane_preserves_aspect_ratio() {
        let plane = image_plane(ImageExtents::new(400, 200));
        assert_eq!(plane.vertex_count(), 6);

        let max_x = plane.positions().iter().map(|p| p.x).fold(f32::MIN, f32::max);
        let max_y = plane.positions().iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert_relative_eq!(max_x, 1.0);
        assert_relative_eq!(max_y, 0.5);
        assert!(plane.colors().iter().all(|c| *c == Vec3::ONE));
        assert!(plane.positions().iter().all(|p| p.z == 1.0));
    }

    #[test]
    fn test_image_plane_top_edge_has_v_zero() {
        let plane = image_plane(ImageExtents::new(100, 300));
        for (pos, uv) in plane.positions().iter().zip(plane.tex_coords()) {
            if pos.y < 0.0 {
                assert_eq!(uv.y, 0.0);
            } else {
                assert_eq!(uv.y, 1.0);
            }
        }
    }

    #[test]
    fn test_stroke_points_keep_point_color() {
        let stroke: Stroke = [ControlPoint::with_color(Vec2::X, Vec3::new(1.0, 0.0, 0.0))]
            .into_iter()
            .collect();
        let mesh = stroke_points_mesh(&stroke);
        assert_eq!(mesh.colors()[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.positions()[0], Vec3::new(1.0, 0.0, 1.0));
    }
}
