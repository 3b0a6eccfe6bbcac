use crate::core::OverlayId;

/// Auswahlbezogener Anwendungszustand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionState {
    /// Hoechstens ein Overlay ist selektiert; eine neue Auswahl
    /// verdraengt die alte implizit.
    pub selected_overlay: Option<OverlayId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_overlay: None,
        }
    }
}
