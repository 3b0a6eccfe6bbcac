//! Core-Domaenentypen: geografische Punkte, Referenzrahmen, Overlays,
//! Register und Kartenausschnitt.

pub mod frame;
pub mod geo;
pub mod map_view;
/// Core-Datenmodelle fuer Overlay-Kataloge
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - OverlaySpec: statischer Katalogeintrag
/// - Overlay: registriertes Overlay mit abgeleiteter Platzierung
/// - OverlayRegistry: Container mit Stapel-Ordnung
pub mod overlay;
pub mod registry;

pub use frame::ReferenceFrame;
pub use geo::LatLng;
pub use map_view::MapView;
pub use overlay::{Overlay, OverlayBounds, OverlayId, OverlaySpec};
pub use registry::OverlayRegistry;
