use crate::core::{LatLng, OverlayId};

/// Bindung der drei Kontrollpunkte an das selektierte Overlay.
///
/// Existiert nur, solange der Bearbeitungsmodus aktiv ist und ein
/// Overlay selektiert ist; eine veraltete Bindung an ein frueheres
/// Overlay ist damit ausgeschlossen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointBinding {
    /// Gebundenes Overlay
    pub overlay_id: OverlayId,
    /// Punkte in Reihenfolge oben-links, oben-rechts, unten-links
    pub points: [LatLng; 3],
}

/// Bestaetigter Eckpunkt-Stand nach einem Drag-Release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedFrame {
    /// Betroffenes Overlay
    pub overlay_id: OverlayId,
    /// Eckpunkte oben-links, oben-rechts, unten-links
    pub corners: [LatLng; 3],
}

impl CommittedFrame {
    /// Textform der Eckpunkte im Katalog-Format
    /// (`[[lat, lng], [lat, lng], [lat, lng]],`).
    pub fn payload(&self) -> String {
        let [p1, p2, p3] = self.corners;
        format!(
            "[[{}, {}], [{}, {}], [{}, {}]],",
            p1.lat, p1.lng, p2.lat, p2.lng, p3.lat, p3.lng
        )
    }
}

/// Bearbeitungs-Zustand: Modus-Flag, globale Deckkraft, Popup-Schalter
/// und die optionale Kontrollpunkt-Bindung.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Ob der Bearbeitungsmodus aktiv ist
    pub edit_mode: bool,
    /// Globale Deckkraft in [0, 1]
    pub opacity: f64,
    /// Ob Popups beim Ueberfahren geoeffnet werden duerfen
    pub popups_enabled: bool,
    /// Aktive Kontrollpunkt-Bindung (None = Punkte geparkt)
    pub binding: Option<ControlPointBinding>,
    /// Letzter bestaetigter Eckpunkt-Stand
    pub last_commit: Option<CommittedFrame>,
}

impl EditorState {
    /// Erstellt den Standard-Bearbeitungszustand.
    pub fn new() -> Self {
        Self {
            edit_mode: false,
            opacity: 1.0,
            popups_enabled: false,
            binding: None,
            last_commit: None,
        }
    }

    /// Aktuelle Kontrollpunkt-Positionen; ohne Bindung liegen alle
    /// drei Punkte auf der Park-Position.
    pub fn control_points(&self) -> [LatLng; 3] {
        match &self.binding {
            Some(binding) => binding.points,
            None => [LatLng::ZERO; 3],
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_points_parked_without_binding() {
        let editor = EditorState::new();
        assert_eq!(editor.control_points(), [LatLng::ZERO; 3]);
    }

    #[test]
    fn test_commit_payload_format() {
        let commit = CommittedFrame {
            overlay_id: 1,
            corners: [
                LatLng::new(59.94, 30.32),
                LatLng::new(59.94, 30.36),
                LatLng::new(59.93, 30.32),
            ],
        };
        assert_eq!(
            commit.payload(),
            "[[59.94, 30.32], [59.94, 30.36], [59.93, 30.32]],"
        );
    }
}
