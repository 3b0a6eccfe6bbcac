//! Use-Case-Funktionen fuer den Bearbeitungsmodus und die
//! Kontrollpunkt-Verschiebung.

use crate::app::state::{CommittedFrame, ControlPointBinding};
use crate::app::AppState;
use crate::core::{LatLng, ReferenceFrame};

use super::opacity;

/// Betritt den Bearbeitungsmodus.
///
/// Senkt die Deckkraft auf den Bearbeitungswert und bindet die
/// Kontrollpunkte an das selektierte Overlay; ohne Selektion bleiben
/// sie geparkt.
pub fn enter_edit_mode(state: &mut AppState) {
    state.editor.edit_mode = true;
    let dimmed = state.options.edit_opacity;
    opacity::set_opacity(state, dimmed);
    bind_control_points(state);
    log::info!("Bearbeitungsmodus aktiviert");
}

/// Verlaesst den Bearbeitungsmodus.
///
/// Stellt die volle Deckkraft wieder her und parkt die Kontrollpunkte;
/// die Overlay-Geometrie bleibt auf dem letzten Stand.
pub fn exit_edit_mode(state: &mut AppState) {
    state.editor.edit_mode = false;
    opacity::set_opacity(state, 1.0);
    state.editor.binding = None;
    log::info!("Bearbeitungsmodus beendet");
}

/// Rastet die Kontrollpunkte auf den Rahmen des selektierten Overlays
/// ein (oder parkt sie, wenn nichts selektiert ist).
pub fn bind_control_points(state: &mut AppState) {
    let binding = match state.selection.selected_overlay {
        Some(id) => state.registry.get(id).map(|overlay| ControlPointBinding {
            overlay_id: id,
            points: overlay.frame.corners(),
        }),
        None => None,
    };
    state.editor.binding = binding;
}

/// Verschiebt einen der drei Kontrollpunkte.
///
/// Ohne aktive Bindung (kein Bearbeitungsmodus oder keine Selektion)
/// ist die Operation wirkungslos.
pub fn move_control_point(state: &mut AppState, index: usize, position: LatLng) {
    let Some(binding) = state.editor.binding.as_mut() else {
        return;
    };
    if index >= binding.points.len() {
        log::warn!("Kontrollpunkt-Index {} ausserhalb des Bereichs", index);
        return;
    }
    binding.points[index] = position;
}

/// Platziert das gebundene Overlay aus den aktuellen Kontrollpunkten
/// neu.
///
/// Entartete Punktlagen werden uebersprungen; die letzte gueltige
/// Platzierung bleibt sichtbar. Mit `commit` wird der Eckpunkt-Stand
/// zusaetzlich als bestaetigtes Ergebnis abgelegt.
pub fn reposition(state: &mut AppState, commit: bool) {
    let Some(binding) = state.editor.binding else {
        return;
    };

    let frame = ReferenceFrame::from_corners(binding.points);
    if frame.is_degenerate() {
        log::warn!("Neuplatzierung uebersprungen: entartete Eckpunkte");
        return;
    }

    let Some(overlay) = state.registry.get_mut(binding.overlay_id) else {
        return;
    };
    overlay.frame = frame;

    if commit {
        let committed = CommittedFrame {
            overlay_id: binding.overlay_id,
            corners: binding.points,
        };
        log::info!("Eckpunkte uebernommen: {}", committed.payload());
        state.editor.last_commit = Some(committed);
    }
}
