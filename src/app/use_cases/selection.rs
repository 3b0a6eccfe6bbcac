//! Use-Case-Funktionen fuer die Overlay-Selektion.

use crate::app::AppState;
use crate::core::OverlayId;

use super::editing;

/// Selektiert ein Overlay exklusiv und hebt es zuoberst.
///
/// Eine unbekannte ID laesst die Selektion unveraendert. Ist der
/// Bearbeitungsmodus aktiv, rasten die Kontrollpunkte sofort auf den
/// Rahmen des neu selektierten Overlays ein.
pub fn select_overlay(state: &mut AppState, overlay_id: OverlayId) {
    if !state.registry.contains(overlay_id) {
        log::warn!("Selektion ignoriert: unbekanntes Overlay {}", overlay_id);
        return;
    }

    state.selection.selected_overlay = Some(overlay_id);
    if let Some(z) = state.registry.raise_to_top(overlay_id) {
        log::debug!("Overlay {} auf z-Index {} gehoben", overlay_id, z);
    }

    if state.editor.edit_mode {
        editing::bind_control_points(state);
    }
}

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.selected_overlay = None;
    if state.editor.edit_mode {
        // Ohne Selektion werden die Kontrollpunkte geparkt
        editing::bind_control_points(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::registration::register_overlay;
    use crate::catalog::parse_overlay_catalog;

    fn state_with_two_overlays() -> AppState {
        let specs = parse_overlay_catalog(
            r#"[
                {"name": "A", "url": "maps/a.jpg", "bounds": [[59.94, 30.32]]},
                {"name": "B", "url": "maps/b.jpg", "bounds": [[59.96, 30.28]]}
            ]"#,
        )
        .expect("Testkatalog sollte parsen");
        let mut state = AppState::new();
        state.load_catalog(specs);
        register_overlay(&mut state, 1, 1000, 1000);
        register_overlay(&mut state, 2, 1000, 1000);
        state
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut state = state_with_two_overlays();

        select_overlay(&mut state, 1);
        assert_eq!(state.selection.selected_overlay, Some(1));

        select_overlay(&mut state, 2);
        assert_eq!(state.selection.selected_overlay, Some(2));
    }

    #[test]
    fn test_reselect_raises_z_index_again() {
        let mut state = state_with_two_overlays();

        select_overlay(&mut state, 1);
        let first = state.registry.get(1).unwrap().z_index;
        select_overlay(&mut state, 1);
        let second = state.registry.get(1).unwrap().z_index;

        assert!(second > first);
    }

    #[test]
    fn test_select_unknown_overlay_keeps_selection() {
        let mut state = state_with_two_overlays();
        select_overlay(&mut state, 1);

        select_overlay(&mut state, 99);
        assert_eq!(state.selection.selected_overlay, Some(1));
    }

    #[test]
    fn test_select_in_edit_mode_binds_control_points() {
        let mut state = state_with_two_overlays();
        editing::enter_edit_mode(&mut state);
        assert!(state.editor.binding.is_none());

        select_overlay(&mut state, 1);
        let binding = state.editor.binding.expect("Bindung erwartet");
        assert_eq!(binding.overlay_id, 1);
        assert_eq!(binding.points, state.registry.get(1).unwrap().frame.corners());
    }

    #[test]
    fn test_clear_selection_parks_control_points_in_edit_mode() {
        let mut state = state_with_two_overlays();
        select_overlay(&mut state, 1);
        editing::enter_edit_mode(&mut state);
        assert!(state.editor.binding.is_some());

        clear_selection(&mut state);
        assert!(state.selection.selected_overlay.is_none());
        assert!(state.editor.binding.is_none());
    }
}
