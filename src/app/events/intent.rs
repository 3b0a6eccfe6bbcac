use crate::core::{LatLng, OverlayId};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Renderer/UI/System ohne direkte
/// Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Rasterbild eines Katalog-Eintrags ist fertig geladen.
    /// Die Signale koennen in beliebiger Reihenfolge eintreffen.
    OverlayImageLoaded {
        overlay_id: OverlayId,
        width_px: u32,
        height_px: u32,
    },
    /// Overlay wurde angeklickt (Selektion)
    OverlayClicked { overlay_id: OverlayId },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Bearbeitungsmodus umschalten (Kontextmenue)
    EditModeToggled,
    /// Popup-Anzeige umschalten (Kontextmenue)
    PopupsToggled,
    /// Kontrollpunkt wird gezogen (Live-Vorschau)
    ControlPointDragged { index: usize, position: LatLng },
    /// Kontrollpunkt wurde losgelassen (Commit)
    ControlPointDragEnded,
    /// Deckkraft-Slider wurde bewegt
    OpacityChanged { value: f64 },
    /// Gruppen-Sichtbarkeit umschalten
    GroupToggled { group: String },
    /// Kartenausschnitt hat sich geaendert (Pan-/Zoom-Ende)
    ViewMoved { center: LatLng, zoom: f64 },
    /// Gespeicherten Kartenausschnitt beim Start wiederherstellen
    ViewRestoreRequested,
}
