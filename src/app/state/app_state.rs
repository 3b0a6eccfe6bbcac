use indexmap::IndexMap;

use crate::app::CommandLog;
use crate::core::{Overlay, OverlayId, OverlayRegistry, OverlaySpec};
use crate::persist::{MemoryStore, ViewStateStore};
use crate::shared::EngineOptions;

use super::{EditorState, SelectionState, ViewState};

/// Hauptzustand der Engine.
///
/// Alle prozessweiten Flags (`edit_mode`, `opacity`, `max_z_index`,
/// Selektion) leben hier als explizite Felder; jede Mutation laeuft
/// ueber genau einen `&mut AppState` durch den Controller — das macht
/// die Single-Writer-Garantie des Event-Loops sichtbar und testbar.
pub struct AppState {
    /// Statischer Katalog, indexiert nach Overlay-ID (Katalog-Reihenfolge)
    pub catalog: IndexMap<OverlayId, OverlaySpec>,
    /// Register aller fertig geladenen Overlays
    pub registry: OverlayRegistry,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Bearbeitungs-State
    pub editor: EditorState,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Ableitungs-Faktoren, Zoom-Grenzen, Gruppen)
    pub options: EngineOptions,
    /// Persistenz des Kartenausschnitts
    pub view_store: Box<dyn ViewStateStore>,
}

impl AppState {
    /// Erstellt einen neuen, leeren Engine-State mit In-Memory-Persistenz.
    pub fn new() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Erstellt einen Engine-State mit dem uebergebenen View-Store.
    pub fn with_store(view_store: Box<dyn ViewStateStore>) -> Self {
        Self {
            catalog: IndexMap::new(),
            registry: OverlayRegistry::new(),
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            options: EngineOptions::default(),
            view_store,
        }
    }

    /// Uebernimmt den Katalog; die IDs werden in Katalog-Reihenfolge
    /// ab 1 vergeben.
    pub fn load_catalog(&mut self, specs: Vec<OverlaySpec>) {
        self.catalog = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| (i as OverlayId + 1, spec))
            .collect();
        log::info!("Katalog mit {} Overlay-Definitionen uebernommen", self.catalog.len());
    }

    /// Gibt die Anzahl der registrierten Overlays zurueck (fuer UI-Anzeige).
    pub fn overlay_count(&self) -> usize {
        self.registry.overlay_count()
    }

    /// Gibt das aktuell selektierte Overlay zurueck, falls vorhanden.
    pub fn selected_overlay(&self) -> Option<&Overlay> {
        self.selection
            .selected_overlay
            .and_then(|id| self.registry.get(id))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
