//! Core-Domänentypen: Kontrollpunkte, Catmull-Rom-Abtastung, Meshes, Kamera.
//!
//! Alles hier ist reine Datenumwandlung ohne GPU- oder UI-Abhängigkeit.

pub mod background_image;
pub mod basis;
pub mod camera;
pub mod control_points;
pub mod error;
pub mod line_list;
pub mod mesh;
/// Catmull-Rom-Abtastung für offene Kurven und geschlossene Schleifen
pub mod sampler;
pub mod scene_assembler;

pub use background_image::BackgroundImage;
pub use basis::SampledCurvePoint;
pub use camera::Camera2D;
pub use control_points::{ControlPoint, ControlPointSet, Stroke};
pub use error::{CurveError, MeshError};
pub use line_list::{expand_to_line_list, line_list_mesh};
pub use mesh::{Mesh, PrimitiveKind};
pub use sampler::{CurveMode, CurveSampler, Neighborhood, SampledCurve};
pub use scene_assembler::{assemble, AssembledScene, ImageExtents, MeshGroup};
