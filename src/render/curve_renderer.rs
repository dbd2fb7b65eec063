//! Kurven-Renderer für die Linienlisten abgeschlossener Kurven.

use super::types::{append_mesh_vertices, RenderContext, SceneVertex, Uniforms};
use crate::core::{AssembledScene, PrimitiveKind};
use eframe::{egui_wgpu, wgpu};

/// Renderer für Kurven (eine Linienliste pro abgeschlossener Kurve)
pub struct CurveRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    vertex_scratch: Vec<SceneVertex>,
}

impl CurveRenderer {
    /// Erstellt einen neuen Kurven-Renderer.
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Curve Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Curve Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Curve Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Curve Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Curve Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_curve"),
                buffers: &[SceneVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_curve"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_scratch: Vec::new(),
        }
    }

    /// Rendert alle Linienlisten der Szene in einem Draw-Call.
    ///
    /// Jede Gruppe hat eine gerade Vertex-Anzahl, die Konkatenation erzeugt
    /// daher keine Linien zwischen verschiedenen Kurven.
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &AssembledScene,
    ) {
        if !ctx.has_valid_viewport() {
            return;
        }

        let mut vertices = std::mem::take(&mut self.vertex_scratch);
        vertices.clear();
        for group in scene.groups_of(PrimitiveKind::LineList) {
            append_mesh_vertices(&group.mesh, &mut vertices);
        }

        if vertices.is_empty() {
            self.vertex_scratch = vertices;
            return;
        }

        let uniforms = Uniforms::new(ctx.camera, ctx.viewport_size, 0);
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        if self.vertex_buffer.is_none() || vertices.len() > self.vertex_capacity {
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Curve Vertex Buffer"),
                size: std::mem::size_of_val(vertices.as_slice()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = vertices.len();
        }

        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            log::error!("CurveRenderer: missing vertex buffer before draw call");
            self.vertex_scratch = vertices;
            return;
        };
        ctx.queue
            .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        log::debug!("Rendering {} curve vertices", vertices.len());

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..vertices.len() as u32, 0..1);
        self.vertex_scratch = vertices;
    }
}
