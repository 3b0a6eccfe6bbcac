use crate::core::MapView;
use std::collections::HashMap;

/// View-bezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktueller Kartenausschnitt
    pub map_view: MapView,
    /// Sichtbarkeit der schaltbaren Gruppen (fehlend = sichtbar)
    pub group_visibility: HashMap<String, bool>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            map_view: MapView::new(),
            group_visibility: HashMap::new(),
        }
    }

    /// Gibt zurueck, ob eine Gruppe aktuell sichtbar ist.
    pub fn is_group_visible(&self, group: &str) -> bool {
        self.group_visibility.get(group).copied().unwrap_or(true)
    }
}
