//! Gemeinsame Typen zwischen Engine und Host: Optionen und Render-Szene.

pub mod options;
pub mod render_scene;

pub use options::EngineOptions;
pub use render_scene::{OverlayPlacement, RenderScene};
