//! Handler fuer die Overlay-Registrierung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::OverlayId;

/// Registriert ein Overlay nach abgeschlossenem Bild-Laden.
pub fn register(state: &mut AppState, overlay_id: OverlayId, width_px: u32, height_px: u32) {
    use_cases::registration::register_overlay(state, overlay_id, width_px, height_px);
}
