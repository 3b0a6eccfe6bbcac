//! Use-Case-Funktionen fuer die Overlay-Registrierung.

use crate::app::AppState;
use crate::core::{Overlay, OverlayId, ReferenceFrame};

/// Registriert ein Overlay, nachdem sein Rasterbild fertig geladen ist.
///
/// Die Lade-Signale treffen asynchron und in beliebiger Reihenfolge
/// ein; ein unbekannter Katalog-Eintrag oder ein doppeltes Signal wird
/// ignoriert. Ein Bild, dessen Laden nie abgeschlossen wird, erzeugt
/// schlicht kein Signal — das Overlay bleibt dann abwesend.
pub fn register_overlay(state: &mut AppState, overlay_id: OverlayId, width_px: u32, height_px: u32) {
    if state.registry.contains(overlay_id) {
        log::debug!("Overlay {} bereits registriert, Lade-Signal ignoriert", overlay_id);
        return;
    }
    let Some(spec) = state.catalog.get(&overlay_id).cloned() else {
        log::warn!("Lade-Signal fuer unbekannten Katalog-Eintrag {} ignoriert", overlay_id);
        return;
    };

    let frame = ReferenceFrame::derive(
        &spec.bounds,
        width_px,
        height_px,
        state.options.multi_x,
        state.options.multi_y,
    );
    let group = spec
        .types
        .iter()
        .find(|tag| state.options.group_tags.contains(*tag))
        .cloned();
    let z_index = spec.z_index.unwrap_or(0);

    let name = spec.name.clone();
    let overlay = Overlay {
        id: overlay_id,
        spec,
        width_px,
        height_px,
        frame,
        z_index,
        group,
        opacity: state.editor.opacity,
    };
    state.registry.register(overlay);
    log::info!("Overlay '{}' registriert ({}x{} px)", name, width_px, height_px);
}
