//! Geografische Basis-Typen fuer die Overlay-Platzierung.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geografischer Punkt in Grad (Breite, Laenge).
///
/// Serialisiert als `[lat, lng]`, wie im Overlay-Katalog und im
/// Commit-Format der Eckpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Geografische Breite in Grad
    pub lat: f64,
    /// Geografische Laenge in Grad
    pub lng: f64,
}

impl LatLng {
    /// Park-Position fuer inaktive Kontrollpunkte.
    pub const ZERO: Self = Self { lat: 0.0, lng: 0.0 };

    /// Erstellt einen Punkt aus Breite und Laenge.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Vektor-Sicht fuer planare Rechnung: x = Laenge, y = Breite.
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[0],
            lng: pair[1],
        }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(point: LatLng) -> Self {
        [point.lat, point.lng]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_roundtrip_as_pair() {
        let point = LatLng::new(59.94, 30.32);
        let pair: [f64; 2] = point.into();
        assert_eq!(pair, [59.94, 30.32]);
        assert_eq!(LatLng::from(pair), point);
    }

    #[test]
    fn test_latlng_json_form() {
        let point: LatLng = serde_json::from_str("[59.94, 30.32]").expect("Punkt erwartet");
        assert_eq!(point, LatLng::new(59.94, 30.32));
        assert_eq!(serde_json::to_string(&point).unwrap(), "[59.94,30.32]");
    }

    #[test]
    fn test_to_dvec2_maps_lng_to_x() {
        let v = LatLng::new(59.94, 30.32).to_dvec2();
        assert_eq!(v.x, 30.32);
        assert_eq!(v.y, 59.94);
    }
}
