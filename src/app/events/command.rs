use crate::core::{LatLng, OverlayId};

/// Mutierende Commands auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Overlay nach Bild-Ladeabschluss registrieren
    RegisterOverlay {
        overlay_id: OverlayId,
        width_px: u32,
        height_px: u32,
    },
    /// Overlay exklusiv selektieren und zuoberst stapeln
    SelectOverlay { overlay_id: OverlayId },
    /// Selektion aufheben
    ClearSelection,
    /// Bearbeitungsmodus betreten
    EnterEditMode,
    /// Bearbeitungsmodus verlassen
    ExitEditMode,
    /// Popup-Anzeige umschalten
    TogglePopups,
    /// Einen Kontrollpunkt verschieben
    MoveControlPoint { index: usize, position: LatLng },
    /// Selektiertes Overlay aus den Kontrollpunkten neu platzieren
    Reposition { commit: bool },
    /// Globale Deckkraft setzen (geklemmt auf [0, 1])
    SetOpacity { value: f64 },
    /// Gruppen-Sichtbarkeit umschalten
    ToggleGroup { group: String },
    /// Kartenausschnitt setzen und persistieren
    SetView { center: LatLng, zoom: f64 },
    /// Kartenausschnitt aus der Persistenz wiederherstellen
    RestoreView,
}
