//! Aufbau der Render-Szene aus dem AppState.

use crate::app::AppState;
use crate::shared::{OverlayPlacement, RenderScene};

/// Baut die Uebergabe-Szene fuer den Karten-Renderer.
///
/// Die Overlays erscheinen in Registrierungs-Reihenfolge; der Renderer
/// stapelt nach `z_index` und blendet unsichtbare Gruppen aus.
pub fn build(state: &AppState) -> RenderScene {
    let overlays = state
        .registry
        .iter()
        .map(|overlay| OverlayPlacement {
            id: overlay.id,
            name: overlay.spec.name.clone(),
            url: overlay.spec.url.clone(),
            corners: overlay.frame.corners(),
            implied_corner: overlay.frame.fourth_corner(),
            area_km2: overlay.frame.area_km2(),
            z_index: overlay.z_index,
            group: overlay.group.clone(),
            visible: overlay
                .group
                .as_deref()
                .map_or(true, |group| state.view.is_group_visible(group)),
            opacity: overlay.opacity,
            selected: state.selection.selected_overlay == Some(overlay.id),
        })
        .collect();

    RenderScene {
        overlays,
        control_points: state.editor.control_points(),
        edit_mode: state.editor.edit_mode,
        popups_enabled: state.editor.popups_enabled,
        opacity: state.editor.opacity,
        view: state.view.map_view,
    }
}
