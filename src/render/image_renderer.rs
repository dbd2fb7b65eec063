//! Bildebenen-Renderer: texturiertes Quad mit Farbfilter.

use super::texture::ImageTexture;
use super::types::{append_mesh_vertices, RenderContext, SceneVertex, Uniforms};
use crate::core::Mesh;
use crate::shared::ImageStyle;
use eframe::{egui_wgpu, wgpu};
use image::DynamicImage;

/// Renderer für das Hintergrundbild
pub struct ImageRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    vertex_scratch: Vec<SceneVertex>,

    // Aktuelles Bild (None = nichts zu zeichnen)
    texture: Option<ImageTexture>,
    bind_group: Option<wgpu::BindGroup>,
}

impl ImageRenderer {
    /// Erstellt einen neuen Bild-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Image Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Image Bind Group Layout"),
            entries: &[
                // Uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Texture
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                // Sampler
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Image Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Image Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_image"),
                buffers: &[SceneVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_image"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4, // Muss mit Punkt- und Kurven-Renderer übereinstimmen
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
            uniform_buffer,
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_scratch: Vec::new(),
            texture: None,
            bind_group: None,
        }
    }

    /// Lädt das Bild als Texture hoch und ersetzt ein vorheriges
    pub fn set_image(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, image: &DynamicImage) {
        log::info!("ImageRenderer: Lade Bild-Texture...");

        let texture = ImageTexture::from_image(device, queue, image, "Background Image Texture");

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Image Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });

        self.texture = Some(texture);
        self.bind_group = Some(bind_group);

        log::info!(
            "ImageRenderer: Texture geladen ({}x{})",
            image.width(),
            image.height()
        );
    }

    /// Entfernt das aktuelle Bild
    pub fn clear_image(&mut self) {
        self.bind_group = None;
        if self.texture.take().is_some() {
            log::info!("ImageRenderer: Bild entfernt");
        }
    }

    /// Rendert die Bildebene mit dem gewählten Farbfilter
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        plane: &Mesh,
        style: ImageStyle,
    ) {
        if !ctx.has_valid_viewport() || plane.is_empty() {
            return;
        }
        let Some(bind_group) = self.bind_group.as_ref() else {
            log::trace!("ImageRenderer: Bildebene ohne Texture übersprungen");
            return;
        };

        let uniforms = Uniforms::new(ctx.camera, ctx.viewport_size, style.shader_index());
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        let mut vertices = std::mem::take(&mut self.vertex_scratch);
        vertices.clear();
        append_mesh_vertices(plane, &mut vertices);

        if self.vertex_buffer.is_none() || vertices.len() > self.vertex_capacity {
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Image Vertex Buffer"),
                size: std::mem::size_of_val(vertices.as_slice()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = vertices.len();
        }

        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            log::error!("ImageRenderer: missing vertex buffer before draw call");
            self.vertex_scratch = vertices;
            return;
        };
        ctx.queue
            .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..vertices.len() as u32, 0..1);

        log::trace!("ImageRenderer: Gerendert ({:?})", style);
        self.vertex_scratch = vertices;
    }
}
