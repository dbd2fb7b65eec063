//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod image_style;
pub mod options;
mod render_scene;

pub use image_style::ImageStyle;
pub use options::EditorOptions;
pub use render_scene::RenderScene;
