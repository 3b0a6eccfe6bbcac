//! Use-Case-Funktionen fuer die globale Deckkraft.

use crate::app::AppState;

/// Setzt die globale Deckkraft, geklemmt auf [0, 1].
///
/// Der Wert wird auf das selektierte Overlay angewendet; ohne
/// Selektion wirkt er als Vorgabe fuer danach registrierte Overlays.
pub fn set_opacity(state: &mut AppState, value: f64) {
    let clamped = value.clamp(0.0, 1.0);
    state.editor.opacity = clamped;

    if let Some(id) = state.selection.selected_overlay {
        if let Some(overlay) = state.registry.get_mut(id) {
            overlay.opacity = clamped;
        }
    }
}
