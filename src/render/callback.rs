//! egui-Paint-Callback, der die Editor-Szene mit wgpu zeichnet.

use super::Renderer;
use crate::shared::RenderScene;
use eframe::egui_wgpu::{CallbackResources, CallbackTrait, ScreenDescriptor};
use eframe::wgpu;
use std::sync::{Arc, Mutex};

/// Paint-Callback für einen Frame.
///
/// Hält die Szene als Snapshot, der Renderer selbst wird zwischen
/// Frames geteilt.
pub struct SceneCallback {
    /// Geteilter Renderer-Zustand
    pub renderer: Arc<Mutex<Renderer>>,
    /// Szene dieses Frames
    pub scene: RenderScene,
    /// wgpu Device für Buffer-Allokation
    pub device: wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: wgpu::Queue,
}

impl CallbackTrait for SceneCallback {
    fn prepare(
        &self,
        _device: &wgpu::Device,
        _queue: &wgpu::Queue,
        _screen_descriptor: &ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &'b CallbackResources,
    ) {
        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer-Lock fehlgeschlagen, Frame übersprungen");
            return;
        };
        log::trace!(
            "paint(): Bild={}, Kontrollpunkte={}",
            self.scene.has_image(),
            self.scene.show_control_points
        );
        renderer.render_scene(&self.device, &self.queue, render_pass, &self.scene);
    }
}
