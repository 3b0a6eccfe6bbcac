//! Handler fuer Kartenausschnitt, Deckkraft, Gruppen und Popups.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LatLng;

/// Setzt die globale Deckkraft.
pub fn set_opacity(state: &mut AppState, value: f64) {
    use_cases::opacity::set_opacity(state, value);
}

/// Schaltet die Popup-Anzeige um.
pub fn toggle_popups(state: &mut AppState) {
    use_cases::view::toggle_popups(state);
}

/// Schaltet die Sichtbarkeit einer Gruppe um.
pub fn toggle_group(state: &mut AppState, group: &str) {
    use_cases::view::toggle_group(state, group);
}

/// Setzt den Kartenausschnitt und persistiert ihn.
pub fn set_view(state: &mut AppState, center: LatLng, zoom: f64) {
    use_cases::view::set_view(state, center, zoom);
}

/// Stellt den Kartenausschnitt aus der Persistenz wieder her.
pub fn restore_view(state: &mut AppState) {
    use_cases::view::restore_view(state);
}
