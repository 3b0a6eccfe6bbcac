//! Application Controller fuer zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Renderer-/UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent ueber Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Fuehrt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Registrierung ===
            AppCommand::RegisterOverlay {
                overlay_id,
                width_px,
                height_px,
            } => handlers::registration::register(state, overlay_id, width_px, height_px),

            // === Selektion ===
            AppCommand::SelectOverlay { overlay_id } => {
                handlers::selection::select(state, overlay_id)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Bearbeitung ===
            AppCommand::EnterEditMode => handlers::editing::enter(state),
            AppCommand::ExitEditMode => handlers::editing::exit(state),
            AppCommand::MoveControlPoint { index, position } => {
                handlers::editing::move_control_point(state, index, position)
            }
            AppCommand::Reposition { commit } => handlers::editing::reposition(state, commit),

            // === Deckkraft, Gruppen & Popups ===
            AppCommand::SetOpacity { value } => handlers::view::set_opacity(state, value),
            AppCommand::TogglePopups => handlers::view::toggle_popups(state),
            AppCommand::ToggleGroup { group } => handlers::view::toggle_group(state, &group),

            // === Kartenausschnitt ===
            AppCommand::SetView { center, zoom } => handlers::view::set_view(state, center, zoom),
            AppCommand::RestoreView => handlers::view::restore_view(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
