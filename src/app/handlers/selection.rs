//! Handler fuer Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::OverlayId;

/// Selektiert ein Overlay exklusiv und hebt es zuoberst.
pub fn select(state: &mut AppState, overlay_id: OverlayId) {
    use_cases::selection::select_overlay(state, overlay_id);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
