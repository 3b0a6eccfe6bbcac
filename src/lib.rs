//! OMaps Overlay Editor Library.
//! Positionierungs- und Bearbeitungs-Engine fuer georeferenzierte
//! Karten-Overlays: Referenzrahmen-Transformation, Overlay-Register,
//! Bearbeitungs-Zustandsmaschine sowie Deckkraft- und
//! Ansichts-Persistenz. Rendering und UI liefert der Host.

pub mod app;
pub mod catalog;
pub mod core;
pub mod persist;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommittedFrame, ControlPointBinding,
    EditorState, SelectionState, ViewState,
};
pub use catalog::parse_overlay_catalog;
pub use core::{
    LatLng, MapView, Overlay, OverlayBounds, OverlayId, OverlayRegistry, OverlaySpec,
    ReferenceFrame,
};
pub use persist::{JsonFileStore, MemoryStore, SavedViewState, ViewStateStore};
pub use shared::{EngineOptions, OverlayPlacement, RenderScene};
