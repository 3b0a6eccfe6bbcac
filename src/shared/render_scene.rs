//! Render-Szene als expliziter Uebergabevertrag zwischen Engine und
//! Karten-Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der externe Renderer
//! sie konsumiert.

use crate::core::{LatLng, MapView, OverlayId};

/// Platzierung eines Overlays fuer den Renderer.
#[derive(Debug, Clone)]
pub struct OverlayPlacement {
    /// Katalog-ID des Overlays
    pub id: OverlayId,
    /// Anzeigename
    pub name: String,
    /// Adresse der Rasterbild-Ressource
    pub url: String,
    /// Eckpunkte oben-links, oben-rechts, unten-links
    pub corners: [LatLng; 3],
    /// Implizite vierte Ecke (unten-rechts)
    pub implied_corner: LatLng,
    /// Kartenflaeche in km² (nur fuer Anzeige, z.B. Popup-Text)
    pub area_km2: f64,
    /// Stapel-Prioritaet des Overlay-Elements
    pub z_index: i64,
    /// Gruppenzugehoerigkeit (hoechstens eine Gruppe)
    pub group: Option<String>,
    /// Sichtbarkeit nach Gruppen-Schaltern
    pub visible: bool,
    /// Deckkraft dieses Overlays
    pub opacity: f64,
    /// Ob dieses Overlay aktuell selektiert ist
    pub selected: bool,
}

/// Read-only Daten fuer einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Overlays in Registrierungs-Reihenfolge
    pub overlays: Vec<OverlayPlacement>,
    /// Aktuelle Kontrollpunkt-Positionen (geparkt wenn inaktiv)
    pub control_points: [LatLng; 3],
    /// Ob der Bearbeitungsmodus aktiv ist
    pub edit_mode: bool,
    /// Ob Popups beim Ueberfahren geoeffnet werden duerfen
    pub popups_enabled: bool,
    /// Globale Deckkraft (fuer UI-Affordanzen wie den Slider)
    pub opacity: f64,
    /// Aktueller Kartenausschnitt
    pub view: MapView,
}

impl RenderScene {
    /// Gibt zurueck, ob Overlays zum Rendern vorhanden sind.
    pub fn has_overlays(&self) -> bool {
        !self.overlays.is_empty()
    }
}
