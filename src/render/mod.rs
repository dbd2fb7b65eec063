//! GPU-Rendering mit wgpu.

mod callback;
mod curve_renderer;
mod image_renderer;
mod point_renderer;
mod texture;
mod types;

pub use crate::shared::RenderScene;
pub use callback::SceneCallback;
pub(crate) use curve_renderer::CurveRenderer;
pub(crate) use image_renderer::ImageRenderer;
pub(crate) use point_renderer::PointRenderer;
use types::RenderContext;

use crate::core::PrimitiveKind;
use eframe::egui_wgpu;
use image::DynamicImage;

/// Haupt-Renderer für Bildebene, Kontrollpunkte und Kurven.
///
/// Verwaltet GPU-Buffer und Pipelines selbst und bietet die API
/// `new()` + `render_scene()` + `set_image()`.
pub struct Renderer {
    image_renderer: ImageRenderer,
    point_renderer: PointRenderer,
    curve_renderer: CurveRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden, alle Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("CatmullRom Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            image_renderer: ImageRenderer::new(render_state, &shader),
            point_renderer: PointRenderer::new(render_state, &shader),
            curve_renderer: CurveRenderer::new(render_state, &shader),
        }
    }

    /// Rendert die komplette Szene
    ///
    /// Reihenfolge: Bildebene, Kontrollpunkte (falls sichtbar), Kurven.
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        log::debug!(
            "Renderer.render_scene() called, {} groups",
            scene.scene.groups.len()
        );

        let ctx = RenderContext {
            device,
            queue,
            camera: &scene.camera,
            viewport_size: scene.viewport_size,
            options: &scene.options,
        };

        // 1. Bildebene zuerst
        if let Some(plane) = scene.scene.groups_of(PrimitiveKind::TriangleList).next() {
            self.image_renderer
                .render(&ctx, render_pass, &plane.mesh, scene.image_style);
        }

        // 2. Kontrollpunkte
        if scene.show_control_points {
            self.point_renderer.render(&ctx, render_pass, &scene.scene);
        }

        // 3. Kurven zuoberst
        self.curve_renderer.render(&ctx, render_pass, &scene.scene);
    }

    /// Setzt das Hintergrundbild
    pub fn set_image(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        image: &DynamicImage,
    ) {
        self.image_renderer.set_image(device, queue, image);
    }

    /// Entfernt das Hintergrundbild
    pub fn clear_image(&mut self) {
        self.image_renderer.clear_image();
    }
}
