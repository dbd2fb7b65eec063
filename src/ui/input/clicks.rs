//! Klick-Events: Linksklick fügt dem aktiven Stroke einen Punkt hinzu.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Linksklicks im Viewport.
    ///
    /// egui meldet keinen Klick, wenn der Zeiger über die Drag-Schwelle
    /// bewegt wurde, ein Pan setzt daher keinen Punkt.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        let world_pos =
            screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
        log::debug!(
            "Klick bei Screen ({:.0}, {:.0}) → Welt ({:.4}, {:.4})",
            pointer_pos.x,
            pointer_pos.y,
            world_pos.x,
            world_pos.y
        );
        events.push(AppIntent::ViewportClicked { world_pos });
    }
}
