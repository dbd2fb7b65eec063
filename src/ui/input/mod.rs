//! Viewport-Input-Handling: Maus-Events, Scroll, Tastatur → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `clicks` — Linksklick setzt einen Kontrollpunkt
//! - `pointer_delta` — Kamera-Pan während eines Drags
//! - `zoom` — Scroll-Zoom auf Mausposition

mod clicks;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, Camera2D};
use crate::shared::EditorOptions;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub options: &'a EditorOptions,
}

/// Verwaltet den Input-Zustand für den Viewport
#[derive(Debug, Default)]
pub struct InputState {
    /// Weltposition unter dem Mauszeiger (für die Statusleiste)
    hover_world: Option<glam::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { hover_world: None }
    }

    /// Weltposition unter dem Mauszeiger im letzten Frame.
    pub fn hover_world(&self) -> Option<glam::Vec2> {
        self.hover_world
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus, Scroll und Tastatur.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
        };

        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        // Keine Shortcuts, solange ein Textfeld den Fokus hat
        if !ui.ctx().wants_keyboard_input() {
            events.extend(keyboard::collect_keyboard_intents(ui));
        }

        self.hover_world = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, response, viewport_size, camera));

        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::from(viewport_size),
    )
}
