//! Mapping von Renderer-/UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Uebersetzt einen `AppIntent` in eine Sequenz ausfuehrbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OverlayImageLoaded {
            overlay_id,
            width_px,
            height_px,
        } => vec![AppCommand::RegisterOverlay {
            overlay_id,
            width_px,
            height_px,
        }],
        AppIntent::OverlayClicked { overlay_id } => {
            vec![AppCommand::SelectOverlay { overlay_id }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::EditModeToggled => {
            if state.editor.edit_mode {
                vec![AppCommand::ExitEditMode]
            } else {
                vec![AppCommand::EnterEditMode]
            }
        }
        AppIntent::PopupsToggled => vec![AppCommand::TogglePopups],
        AppIntent::ControlPointDragged { index, position } => vec![
            AppCommand::MoveControlPoint { index, position },
            AppCommand::Reposition { commit: false },
        ],
        AppIntent::ControlPointDragEnded => vec![AppCommand::Reposition { commit: true }],
        AppIntent::OpacityChanged { value } => vec![AppCommand::SetOpacity { value }],
        AppIntent::GroupToggled { group } => vec![AppCommand::ToggleGroup { group }],
        AppIntent::ViewMoved { center, zoom } => vec![AppCommand::SetView { center, zoom }],
        AppIntent::ViewRestoreRequested => vec![AppCommand::RestoreView],
    }
}
