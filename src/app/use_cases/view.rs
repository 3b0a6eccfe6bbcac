//! Use-Case-Funktionen fuer Kartenausschnitt, Gruppen und Popups.

use crate::app::AppState;
use crate::core::LatLng;
use crate::persist::SavedViewState;

/// Setzt den Kartenausschnitt und persistiert ihn.
///
/// Wird bei jedem Pan-/Zoom-Ende aufgerufen; jeder Stand ueberschreibt
/// den vorherigen vollstaendig. Ein Speicherfehler wird geloggt, nicht
/// propagiert.
pub fn set_view(state: &mut AppState, center: LatLng, zoom: f64) {
    state.view.map_view.move_to(
        center,
        zoom,
        state.options.zoom_min,
        state.options.zoom_max,
    );

    let saved = SavedViewState {
        lat: state.view.map_view.center.lat,
        lng: state.view.map_view.center.lng,
        zoom: state.view.map_view.zoom,
    };
    if let Err(e) = state.view_store.save(&saved) {
        log::warn!("Ansichtszustand konnte nicht gespeichert werden: {:#}", e);
    }
}

/// Stellt den Kartenausschnitt aus der Persistenz wieder her.
///
/// Fehlender Stand ist kein Fehler: dann gilt die Standardansicht aus
/// den Optionen.
pub fn restore_view(state: &mut AppState) {
    match state.view_store.load() {
        Some(saved) => {
            state.view.map_view.move_to(
                LatLng::new(saved.lat, saved.lng),
                saved.zoom,
                state.options.zoom_min,
                state.options.zoom_max,
            );
            log::info!(
                "Ansichtszustand wiederhergestellt: ({:.6}, {:.6}) @ {}",
                saved.lat,
                saved.lng,
                state.view.map_view.zoom
            );
        }
        None => {
            state.view.map_view.move_to(
                LatLng::new(state.options.default_center_lat, state.options.default_center_lng),
                state.options.default_zoom,
                state.options.zoom_min,
                state.options.zoom_max,
            );
            log::info!("Kein gespeicherter Ansichtszustand, verwende Standardansicht");
        }
    }
}

/// Schaltet die Sichtbarkeit einer Gruppe um.
pub fn toggle_group(state: &mut AppState, group: &str) {
    let visible = state
        .view
        .group_visibility
        .entry(group.to_string())
        .or_insert(true);
    *visible = !*visible;
    log::info!("Gruppe '{}' {}", group, if *visible { "eingeblendet" } else { "ausgeblendet" });
}

/// Schaltet die Popup-Anzeige um.
pub fn toggle_popups(state: &mut AppState) {
    state.editor.popups_enabled = !state.editor.popups_enabled;
}
