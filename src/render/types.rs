//! Rendering-Typen: Vertex-Layouts, Uniforms und View-Projektion.

use crate::core::Mesh;
use crate::shared::EditorOptions;
use crate::Camera2D;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und View-Parameter, die jeder
/// Sub-Renderer bei jedem Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Kamera (Position + Zoom)
    pub camera: &'a Camera2D,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Gibt `true` zurück, wenn der Viewport eine zeichenbare Größe hat.
    pub fn has_valid_viewport(&self) -> bool {
        let [w, h] = self.viewport_size;
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }
}

/// Vertex für ein Quad (2D-Rechteck, Punkt-Sprite)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Lokale Position im Einheitsquadrat [-1, 1]
    pub position: [f32; 2],
}

impl QuadVertex {
    /// Zwei Dreiecke über [-1, 1]².
    pub const QUAD: [QuadVertex; 6] = [
        QuadVertex {
            position: [-1.0, -1.0],
        },
        QuadVertex {
            position: [1.0, -1.0],
        },
        QuadVertex {
            position: [1.0, 1.0],
        },
        QuadVertex {
            position: [-1.0, -1.0],
        },
        QuadVertex {
            position: [1.0, 1.0],
        },
        QuadVertex {
            position: [-1.0, 1.0],
        },
    ];

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Vertex aus einem `Mesh`: Position, Farbe und Texturkoordinate (je 3 Floats).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneVertex {
    /// Position (z = 1, homogene Komponente)
    pub position: [f32; 3],
    /// RGB-Farbe
    pub color: [f32; 3],
    /// Texturkoordinate (u, v, 0)
    pub tex_coord: [f32; 3],
}

impl SceneVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SceneVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Hängt alle Vertices eines Meshes in GPU-Layout an `out` an.
pub(crate) fn append_mesh_vertices(mesh: &Mesh, out: &mut Vec<SceneVertex>) {
    out.reserve(mesh.vertex_count());
    out.extend(
        mesh.flattened_vertices()
            .map(|[position, color, tex_coord]| SceneVertex {
                position,
                color,
                tex_coord,
            }),
    );
}

/// Instanz-Daten für einen Kontrollpunkt
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    /// Position im 2D-Raum (Weltkoordinaten)
    pub position: [f32; 2],
    /// RGB-Farbe des Punkts
    pub color: [f32; 3],
    /// Durchmesser in Welteinheiten
    pub size: f32,
}

impl PointInstance {
    /// Beschreibt das Instanz-Layout für wgpu (PointInstance).
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 5]>() as eframe::wgpu::BufferAddress,
                    shader_location: 3,
                    format: eframe::wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Uniform-Buffer für View-Projektion
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// x: Bildstil-Index, restliche Komponenten ungenutzt
    pub params: [f32; 4],
}

impl Uniforms {
    /// Baut die Uniforms für Kamera, Viewport und Bildstil.
    pub fn new(camera: &Camera2D, viewport_size: [f32; 2], style_index: u32) -> Self {
        Self {
            view_proj: build_view_projection(camera, viewport_size).to_cols_array_2d(),
            params: [style_index as f32, 0.0, 0.0, 0.0],
        }
    }
}

/// Berechnet die View-Projection-Matrix für den 2D-Viewport.
///
/// Welt-y wächst nach unten wie Screen-Space.
pub(crate) fn build_view_projection(camera: &Camera2D, viewport_size: [f32; 2]) -> Mat4 {
    let view_matrix = camera.view_matrix();
    let aspect = viewport_size[0] / viewport_size[1].max(1.0);
    let zoom_scale = 1.0 / camera.zoom;
    let base_extent = Camera2D::BASE_WORLD_EXTENT;

    let projection = Mat4::orthographic_rh(
        -base_extent * aspect * zoom_scale,
        base_extent * aspect * zoom_scale,
        base_extent * zoom_scale,
        -base_extent * zoom_scale,
        -1.0,
        1.0,
    );

    let view_mat4 = Mat4::from_cols(
        view_matrix.x_axis.extend(0.0),
        view_matrix.y_axis.extend(0.0),
        glam::Vec4::new(0.0, 0.0, 1.0, 0.0),
        view_matrix.z_axis.extend(1.0),
    );

    projection * view_mat4
}
