//! Referenzrahmen: affine Platzierung eines Bildrechtecks auf der
//! geografischen Ebene.

use glam::DVec2;

use super::geo::LatLng;
use super::overlay::OverlayBounds;

/// Kilometer pro Breitengrad (planare Naeherung).
const KM_PER_DEGREE: f64 = 111.32;

/// Toleranz fuer den Kollinearitaets-Test (Grad im Quadrat).
const DEGENERACY_EPSILON: f64 = 1e-12;

/// Drei geografische Punkte, die das Bildrechteck affin aufspannen.
///
/// Der vierte Eckpunkt folgt aus der Affinitaet. Invariante: die drei
/// Punkte duerfen nicht kollinear sein — vor jeder Platzierung prueft
/// der Aufrufer [`ReferenceFrame::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    /// Linke obere Bildecke
    pub top_left: LatLng,
    /// Rechte obere Bildecke
    pub top_right: LatLng,
    /// Linke untere Bildecke
    pub bottom_left: LatLng,
}

impl ReferenceFrame {
    /// Erstellt einen Rahmen aus drei Eckpunkten
    /// (Reihenfolge: oben-links, oben-rechts, unten-links).
    pub fn from_corners(corners: [LatLng; 3]) -> Self {
        Self {
            top_left: corners[0],
            top_right: corners[1],
            bottom_left: corners[2],
        }
    }

    /// Leitet den Rahmen aus den Katalog-Bounds ab.
    ///
    /// Ein expliziter Drei-Punkt-Rahmen wird unveraendert uebernommen.
    /// Bei einer einzelnen Ecke werden die uebrigen Punkte ueber die
    /// Kleinwinkel-Faktoren `multi_x` (Breite pro Pixel Bildhoehe) und
    /// `multi_y` (Laenge pro Pixel Bildbreite) synthetisiert — eine
    /// lokale Flache-Erde-Naeherung, gueltig nur nahe der
    /// Referenzbreite des Einsatzgebiets.
    pub fn derive(
        bounds: &OverlayBounds,
        width_px: u32,
        height_px: u32,
        multi_x: f64,
        multi_y: f64,
    ) -> Self {
        match bounds {
            OverlayBounds::Corners(corners) => Self::from_corners(*corners),
            OverlayBounds::Origin([origin]) => Self {
                top_left: *origin,
                top_right: LatLng::new(origin.lat, origin.lng + f64::from(width_px) * multi_y),
                bottom_left: LatLng::new(origin.lat - f64::from(height_px) * multi_x, origin.lng),
            },
        }
    }

    /// Eckpunkte in Reihenfolge oben-links, oben-rechts, unten-links.
    pub fn corners(&self) -> [LatLng; 3] {
        [self.top_left, self.top_right, self.bottom_left]
    }

    /// Implizite vierte Ecke (unten-rechts) aus der Affinitaet.
    pub fn fourth_corner(&self) -> LatLng {
        LatLng::new(
            self.top_right.lat + self.bottom_left.lat - self.top_left.lat,
            self.top_right.lng + self.bottom_left.lng - self.top_left.lng,
        )
    }

    /// Prueft, ob die drei Punkte (nahezu) kollinear sind.
    ///
    /// Ein entarteter Rahmen hat keine definierte Platzierung; die
    /// Platzierung wird dann uebersprungen und der letzte gueltige
    /// Stand bleibt sichtbar.
    pub fn is_degenerate(&self) -> bool {
        let u = self.top_right.to_dvec2() - self.top_left.to_dvec2();
        let v = self.bottom_left.to_dvec2() - self.top_left.to_dvec2();
        u.perp_dot(v).abs() < DEGENERACY_EPSILON
    }

    /// Flaeche des aufgespannten Parallelogramms in km².
    ///
    /// Planare Naeherung mit Laengengrad-Skalierung auf der Breite der
    /// linken oberen Ecke; nur fuer Anzeigezwecke gedacht, nicht
    /// geodaetisch exakt.
    pub fn area_km2(&self) -> f64 {
        let scale = DVec2::new(
            KM_PER_DEGREE * self.top_left.lat.to_radians().cos(),
            KM_PER_DEGREE,
        );
        let u = (self.top_right.to_dvec2() - self.top_left.to_dvec2()) * scale;
        let v = (self.bottom_left.to_dvec2() - self.top_left.to_dvec2()) * scale;
        u.perp_dot(v).abs()
    }
}
