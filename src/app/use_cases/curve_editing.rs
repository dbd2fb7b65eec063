//! Use-Case-Funktionen für das Platzieren von Kontrollpunkten und Abschließen von Kurven.

use crate::app::AppState;
use crate::core::{line_list_mesh, ControlPoint, CurveError, CurveMode, CurveSampler};
use std::sync::Arc;

/// Hängt einen Kontrollpunkt (Weltkoordinaten) an den aktiven Stroke an.
///
/// Die Farbe kommt aus `EditorOptions::control_point_color`.
pub fn append_control_point(state: &mut AppState, world_pos: glam::Vec2) {
    let point = ControlPoint::with_color(world_pos, state.options.control_point_color_vec());
    state.editor.control_points.append(point);
    log::debug!(
        "Kontrollpunkt ({:.3}, {:.3}) angehängt, aktiver Stroke: {} Punkte",
        world_pos.x,
        world_pos.y,
        state.editor.control_points.active().len()
    );
}

/// Tastet den aktiven Stroke ab, speichert das Kurven-Mesh und schließt den Stroke.
///
/// Gibt die Vertex-Anzahl des neuen `LineList`-Meshes zurück. Bei zu wenigen
/// Punkten bleibt die Kontrollpunkt-Sammlung unverändert.
pub fn finalize_active_stroke(state: &mut AppState, mode: CurveMode) -> Result<usize, CurveError> {
    let sampler = CurveSampler::new(state.options.curve_sample_step);
    let curve = sampler.sample(state.editor.control_points.active(), mode)?;

    let mesh = line_list_mesh(&curve);
    let vertex_count = mesh.vertex_count();
    state.editor.curves.push(Arc::new(mesh));

    let point_count = state.editor.control_points.close_active().len();
    log::info!(
        "{} aus {} Kontrollpunkten erstellt: {} Samples, {} Linien-Vertices",
        mode,
        point_count,
        curve.len(),
        vertex_count
    );

    Ok(vertex_count)
}

/// Schaltet die Sichtbarkeit der Kontrollpunkte um.
pub fn toggle_control_point_visibility(state: &mut AppState) {
    state.editor.show_control_points = !state.editor.show_control_points;
    log::info!(
        "Kontrollpunkte: {}",
        if state.editor.show_control_points {
            "sichtbar"
        } else {
            "ausgeblendet"
        }
    );
}
