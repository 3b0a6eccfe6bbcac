//! Katalog-Metadaten und registrierte Overlays.

use serde::{Deserialize, Serialize};

use super::{LatLng, ReferenceFrame};

/// Eindeutige Overlay-ID (vergeben in Katalog-Reihenfolge).
pub type OverlayId = u64;

/// Begrenzung eines Overlays im Katalog.
///
/// Entweder ein expliziter Drei-Punkt-Rahmen oder nur die linke obere
/// Ecke; im zweiten Fall wird der Rahmen aus den Pixelmassen des
/// geladenen Bildes abgeleitet. Genau eine Darstellung ist vorhanden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverlayBounds {
    /// Expliziter Rahmen: oben-links, oben-rechts, unten-links
    Corners([LatLng; 3]),
    /// Nur die linke obere Ecke
    Origin([LatLng; 1]),
}

impl OverlayBounds {
    /// Gibt zurueck, ob der Rahmen explizit angegeben ist.
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Corners(_))
    }
}

/// Katalogeintrag eines georeferenzierten Overlays.
///
/// Statische Metadaten, einmalig beim Start eingelesen und danach
/// unveraenderlich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySpec {
    /// Anzeigename
    pub name: String,
    /// Adresse der Rasterbild-Ressource
    pub url: String,
    /// Geografische Begrenzung (ein oder drei Punkte)
    pub bounds: OverlayBounds,
    /// Kategorie-Tags (u.a. Gruppenzugehoerigkeit)
    #[serde(default)]
    pub types: Vec<String>,
    /// Erscheinungsjahr der Karte
    #[serde(default)]
    pub year: Option<u16>,
    /// Freitext-Beschreibung
    #[serde(default)]
    pub info: Option<String>,
    /// Download-Link
    #[serde(default)]
    pub link: Option<String>,
    /// Explizite Stapel-Prioritaet
    #[serde(default, rename = "zindex")]
    pub z_index: Option<i64>,
}

/// Registriertes Overlay mit abgeleiteter Platzierung.
///
/// Entsteht, sobald das Rasterbild fertig geladen ist; wird waehrend
/// einer Session nie zerstoert. Nur der Rahmen (und damit die
/// Platzierung) aendert sich durch Bearbeitung.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Katalog-ID
    pub id: OverlayId,
    /// Statische Katalog-Metadaten
    pub spec: OverlaySpec,
    /// Bildbreite in Pixel
    pub width_px: u32,
    /// Bildhoehe in Pixel
    pub height_px: u32,
    /// Aktueller Referenzrahmen (drei Eckpunkte)
    pub frame: ReferenceFrame,
    /// Effektive Stapel-Prioritaet
    pub z_index: i64,
    /// Aufgeloeste Gruppenzugehoerigkeit (hoechstens eine Gruppe)
    pub group: Option<String>,
    /// Deckkraft dieses Overlays
    pub opacity: f64,
}
