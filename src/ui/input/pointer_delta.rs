//! Pointer-Delta-Verarbeitung: Kamera-Pan.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verschiebt die Kamera, solange mit einer beliebigen Maustaste gezogen wird.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let dragging = ctx.response.dragged_by(egui::PointerButton::Primary)
            || ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary);
        if !dragging {
            return;
        }

        // Inhalt folgt dem Zeiger: Kamera bewegt sich entgegengesetzt
        let wpp = ctx.camera.world_per_pixel(ctx.viewport_size[1]);
        events.push(AppIntent::CameraPan {
            delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
        });
    }
}
