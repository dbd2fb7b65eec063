use approx::assert_relative_eq;
use catmull_rom_editor::core::basis;
use catmull_rom_editor::core::{
    assemble, expand_to_line_list, line_list_mesh, ControlPoint, ControlPointSet, CurveError,
    CurveMode, CurveSampler, ImageExtents, PrimitiveKind, Stroke,
};
use glam::{Vec2, Vec3};
use std::sync::Arc;

fn stroke_of(points: &[(f32, f32)]) -> Stroke {
    let mut stroke = Stroke::new();
    for &(x, y) in points {
        stroke.push(ControlPoint::new(Vec2::new(x, y)));
    }
    stroke
}

#[test]
fn test_open_curve_reference_shape() {
    let stroke = stroke_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)]);
    let sampler = CurveSampler::new(0.005);

    let curve = sampler
        .sample(&stroke, CurveMode::Open)
        .expect("4 Punkte reichen für eine offene Kurve");

    assert_eq!(curve.len(), 200);
    let parameters: Vec<(usize, f32)> = sampler.parameters(CurveMode::Open.loop_max(4)).collect();
    assert_eq!(parameters.len(), 200);
    assert!(parameters.iter().all(|&(segment, _)| segment == 0));
    assert_relative_eq!(parameters[0].1, 0.0);
    assert_relative_eq!(parameters[199].1, 0.995, epsilon = 1e-6);

    let hood = CurveMode::Open.neighborhood(0, 4);
    assert_eq!((hood.p0, hood.p1, hood.p2, hood.p3), (0, 1, 2, 3));
}

#[test]
fn test_open_curve_starts_exactly_at_second_point() {
    let stroke = stroke_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0), (4.0, 2.0)]);
    let points = stroke.points();

    let curve = CurveSampler::default()
        .sample(&stroke, CurveMode::Open)
        .expect("offene Kurve");

    let first = basis::evaluate([points[0], points[1], points[2], points[3]], 0.0);
    assert_eq!(curve.points()[0].position, first.position);
    assert_eq!(curve.points()[0].position, points[1].position);
}

#[test]
fn test_open_curve_reaches_second_to_last_point_at_segment_end() {
    let stroke = stroke_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0), (4.0, 2.0)]);
    let points = stroke.points();
    let n = points.len();
    let last_segment = CurveMode::Open.loop_max(n) - 1;
    let hood = CurveMode::Open.neighborhood(last_segment, n);

    let end = basis::evaluate(
        [points[hood.p0], points[hood.p1], points[hood.p2], points[hood.p3]],
        1.0,
    );

    assert_relative_eq!(end.position.x, points[n - 2].position.x, epsilon = 1e-6);
    assert_relative_eq!(end.position.y, points[n - 2].position.y, epsilon = 1e-6);
}

#[test]
fn test_closed_loop_returns_to_start() {
    let stroke = stroke_of(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);

    let curve = CurveSampler::default()
        .sample(&stroke, CurveMode::Closed)
        .expect("3 Punkte reichen für eine Schleife");

    assert_eq!(CurveMode::Closed.loop_max(3), 3);
    assert_eq!(curve.len(), 601);
    let first = curve.points()[0].position;
    let last = curve.points()[curve.len() - 1].position;
    assert_relative_eq!(first.x, last.x, epsilon = 1e-5);
    assert_relative_eq!(first.y, last.y, epsilon = 1e-5);

    let hood = CurveMode::Closed.neighborhood(0, 3);
    assert_eq!((hood.p0, hood.p1, hood.p2, hood.p3), (2, 0, 1, 2));
}

#[test]
fn test_irregular_closed_loop_closes_in_position_and_color() {
    let coords = [
        (0.0, 0.0),
        (2.3, -0.4),
        (3.1, 1.7),
        (1.2, 2.9),
        (-0.8, 2.2),
        (-1.5, 0.6),
    ];
    let colors = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];
    let mut stroke = Stroke::new();
    for (&(x, y), &color) in coords.iter().zip(&colors) {
        stroke.push(ControlPoint::with_color(Vec2::new(x, y), color));
    }

    let curve = CurveSampler::default()
        .sample(&stroke, CurveMode::Closed)
        .expect("6 Punkte reichen für eine Schleife");

    // 6 Segmente à 200 Samples + Schluss-Sample
    assert_eq!(curve.len(), 1201);

    let first = curve.points()[0];
    let last = curve.points()[curve.len() - 1];
    assert_relative_eq!(first.position.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(first.position.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(last.position.x, first.position.x, epsilon = 1e-5);
    assert_relative_eq!(last.position.y, first.position.y, epsilon = 1e-5);
    assert_relative_eq!(last.color.x, first.color.x, epsilon = 1e-5);
    assert_relative_eq!(last.color.y, first.color.y, epsilon = 1e-5);
    assert_relative_eq!(last.color.z, first.color.z, epsilon = 1e-5);
    assert_relative_eq!(first.color.x, 1.0, epsilon = 1e-6);

    let hood = CurveMode::Closed.neighborhood(5, 6);
    assert_eq!((hood.p0, hood.p1, hood.p2, hood.p3), (4, 5, 0, 1));
}

#[test]
fn test_line_list_vertex_counts() {
    let stroke = stroke_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)]);
    let curve = CurveSampler::default()
        .sample(&stroke, CurveMode::Open)
        .expect("offene Kurve");

    assert_eq!(expand_to_line_list(curve.points()).len(), 398);
    assert_eq!(line_list_mesh(&curve).vertex_count(), 398);
    assert!(expand_to_line_list(&curve.points()[..1]).is_empty());
    assert!(expand_to_line_list(&[]).is_empty());
}

#[test]
fn test_too_few_points_is_rejected() {
    let stroke = stroke_of(&[(0.0, 0.0), (1.0, 1.0)]);

    let open = CurveSampler::default().sample(&stroke, CurveMode::Open);
    let closed = CurveSampler::default().sample(&stroke, CurveMode::Closed);

    assert!(matches!(
        open,
        Err(CurveError::NotEnoughControlPoints {
            required: 4,
            actual: 2,
            ..
        })
    ));
    assert!(matches!(
        closed,
        Err(CurveError::NotEnoughControlPoints {
            required: 3,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_assembled_scene_meshes_are_consistent() {
    let mut set = ControlPointSet::new();
    for (x, y) in [(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)] {
        set.append(ControlPoint::new(Vec2::new(x, y)));
    }
    let curve = CurveSampler::default()
        .sample(set.active(), CurveMode::Open)
        .expect("offene Kurve");
    set.close_active();
    set.append(ControlPoint::new(Vec2::new(0.5, 0.5)));

    let scene = assemble(
        Some(ImageExtents::new(640, 480)),
        &set,
        &[Arc::new(line_list_mesh(&curve))],
    )
    .expect("Szene");

    assert_eq!(scene.vertex_count_of(PrimitiveKind::TriangleList), 6);
    assert_eq!(scene.groups_of(PrimitiveKind::PointList).count(), 2);
    assert_eq!(scene.vertex_count_of(PrimitiveKind::PointList), 5);
    assert_eq!(scene.vertex_count_of(PrimitiveKind::LineList), 398);
    for group in &scene.groups {
        assert!(group.mesh.validate().is_ok());
        assert_eq!(group.mesh.positions().len(), group.mesh.colors().len());
        assert_eq!(group.mesh.positions().len(), group.mesh.tex_coords().len());
    }
}
