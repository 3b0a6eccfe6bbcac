//! Handler fuer den Bearbeitungsmodus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LatLng;

/// Betritt den Bearbeitungsmodus.
pub fn enter(state: &mut AppState) {
    use_cases::editing::enter_edit_mode(state);
}

/// Verlaesst den Bearbeitungsmodus.
pub fn exit(state: &mut AppState) {
    use_cases::editing::exit_edit_mode(state);
}

/// Verschiebt einen Kontrollpunkt.
pub fn move_control_point(state: &mut AppState, index: usize, position: LatLng) {
    use_cases::editing::move_control_point(state, index, position);
}

/// Platziert das gebundene Overlay neu (live oder mit Commit).
pub fn reposition(state: &mut AppState, commit: bool) {
    use_cases::editing::reposition(state, commit);
}
