//! Kartenausschnitt: Zentrum und Zoomstufe des Canvas.

use super::geo::LatLng;

/// Aktueller Kartenausschnitt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    /// Zentrum des Ausschnitts
    pub center: LatLng,
    /// Zoomstufe der Kachel-Ebene
    pub zoom: f64,
}

impl MapView {
    /// Standard-Zentrum des Einsatzgebiets.
    pub const DEFAULT_CENTER: LatLng = LatLng {
        lat: 59.944179,
        lng: 30.320337,
    };
    /// Standard-Zoomstufe.
    pub const DEFAULT_ZOOM: f64 = 11.0;
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 8.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 18.0;

    /// Erstellt den Standard-Ausschnitt.
    pub fn new() -> Self {
        Self {
            center: Self::DEFAULT_CENTER,
            zoom: Self::DEFAULT_ZOOM,
        }
    }

    /// Setzt den Ausschnitt; die Zoomstufe wird auf die uebergebenen
    /// Grenzen geklemmt.
    pub fn move_to(&mut self, center: LatLng, zoom: f64, zoom_min: f64, zoom_max: f64) {
        self.center = center;
        self.zoom = zoom.clamp(zoom_min, zoom_max);
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}
