//! CatmullRom-Editor Library.
//! Kurvenlogik, App-Schicht und Renderer als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorState, UiState, ViewState};
pub use core::{BackgroundImage, Camera2D};
pub use core::{ControlPoint, ControlPointSet, CurveMode, CurveSampler, Mesh, PrimitiveKind};
pub use shared::{EditorOptions, ImageStyle, RenderScene};
