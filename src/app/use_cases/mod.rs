//! Use-Cases der Application-Layer-Orchestrierung.

pub mod background_image;
pub mod camera;
pub mod curve_editing;
pub mod viewport;
