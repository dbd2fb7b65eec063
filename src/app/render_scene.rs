//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{self, AssembledScene};
use crate::shared::RenderScene;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Schlägt der Szenen-Zusammenbau fehl (Mesh-Invariante verletzt), wird der
/// Fehler geloggt und ein Frame ohne Geometrie geliefert.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let extents = state
        .view
        .background_image
        .as_ref()
        .map(|image| image.extents());

    let scene = match core::assemble(
        extents,
        &state.editor.control_points,
        &state.editor.curves,
    ) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Szenen-Zusammenbau fehlgeschlagen: {}", e);
            AssembledScene::default()
        }
    };

    RenderScene {
        scene: Arc::new(scene),
        camera: state.view.camera.clone(),
        viewport_size,
        image_style: state.view.image_style,
        show_control_points: state.editor.show_control_points,
        options: state.options.clone(),
    }
}
