//! Das zentrale Overlay-Register mit Stapel-Ordnung.

use indexmap::IndexMap;

use super::overlay::{Overlay, OverlayId};

/// Container fuer alle registrierten Overlays.
///
/// Die Einfuege-Reihenfolge bleibt erhalten (Lade-Reihenfolge =
/// Standard-Stapelung); der Stapel-Zaehler `max_z_index` waechst streng
/// monoton ueber die Prozesslebensdauer und wird nie wiederverwendet.
#[derive(Debug, Clone)]
pub struct OverlayRegistry {
    /// Alle Overlays, indexiert nach ihrer Katalog-ID
    overlays: IndexMap<OverlayId, Overlay>,
    /// Naechste zu vergebende Stapel-Prioritaet
    max_z_index: i64,
}

impl OverlayRegistry {
    /// Erstellt ein leeres Register.
    pub fn new() -> Self {
        Self {
            overlays: IndexMap::new(),
            max_z_index: 1,
        }
    }

    /// Fuegt ein Overlay hinzu.
    ///
    /// Ein bereits registriertes Overlay (doppeltes Lade-Signal) wird
    /// ignoriert. Eine explizite Stapel-Prioritaet hebt den Zaehler
    /// an, damit eine spaetere Selektion garantiert zuoberst landet.
    pub fn register(&mut self, overlay: Overlay) -> bool {
        if self.overlays.contains_key(&overlay.id) {
            log::debug!("Overlay {} bereits registriert, ignoriert", overlay.id);
            return false;
        }
        if overlay.z_index >= self.max_z_index {
            self.max_z_index = overlay.z_index + 1;
        }
        self.overlays.insert(overlay.id, overlay);
        true
    }

    /// Prueft ob ein Overlay registriert ist.
    pub fn contains(&self, id: OverlayId) -> bool {
        self.overlays.contains_key(&id)
    }

    /// Findet ein Overlay.
    pub fn get(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.get(&id)
    }

    /// Findet ein Overlay (mutable).
    pub fn get_mut(&mut self, id: OverlayId) -> Option<&mut Overlay> {
        self.overlays.get_mut(&id)
    }

    /// Hebt ein Overlay ueber alle bisher vergebenen Prioritaeten.
    ///
    /// Vergibt `max_z_index` und erhoeht den Zaehler — auch bei
    /// wiederholter Selektion desselben Overlays, damit das zuletzt
    /// beruehrte Overlay immer zuoberst liegt.
    pub fn raise_to_top(&mut self, id: OverlayId) -> Option<i64> {
        let overlay = self.overlays.get_mut(&id)?;
        let z = self.max_z_index;
        overlay.z_index = z;
        self.max_z_index += 1;
        Some(z)
    }

    /// Aktueller Stand des Stapel-Zaehlers.
    pub fn max_z_index(&self) -> i64 {
        self.max_z_index
    }

    /// Gibt die Anzahl der registrierten Overlays zurueck.
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Gibt `true` zurueck, wenn keine Overlays registriert sind.
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Iterator ueber alle Overlays in Registrierungs-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.values()
    }
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatLng, OverlayBounds, OverlaySpec, ReferenceFrame};

    fn make_overlay(id: OverlayId, z_index: i64) -> Overlay {
        let spec = OverlaySpec {
            name: format!("Karte {id}"),
            url: format!("maps/{id}.jpg"),
            bounds: OverlayBounds::Origin([LatLng::new(59.94, 30.32)]),
            types: Vec::new(),
            year: None,
            info: None,
            link: None,
            z_index: None,
        };
        Overlay {
            id,
            frame: ReferenceFrame::derive(&spec.bounds, 1000, 1000, 1e-5, 2e-5),
            spec,
            width_px: 1000,
            height_px: 1000,
            z_index,
            group: None,
            opacity: 1.0,
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = OverlayRegistry::new();
        assert!(registry.register(make_overlay(1, 0)));
        assert!(registry.contains(1));
        assert_eq!(registry.overlay_count(), 1);
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn test_duplicate_registration_is_ignored() {
        let mut registry = OverlayRegistry::new();
        assert!(registry.register(make_overlay(1, 0)));
        assert!(!registry.register(make_overlay(1, 0)));
        assert_eq!(registry.overlay_count(), 1);
    }

    #[test]
    fn test_raise_to_top_is_strictly_monotonic() {
        let mut registry = OverlayRegistry::new();
        registry.register(make_overlay(1, 0));

        // Auch wiederholte Selektion desselben Overlays erhoeht weiter
        let first = registry.raise_to_top(1).expect("Overlay vorhanden");
        let second = registry.raise_to_top(1).expect("Overlay vorhanden");
        assert!(second > first);
        assert_eq!(registry.get(1).unwrap().z_index, second);
    }

    #[test]
    fn test_raise_to_top_unknown_overlay_is_noop() {
        let mut registry = OverlayRegistry::new();
        registry.register(make_overlay(1, 0));
        let counter_before = registry.max_z_index();

        assert!(registry.raise_to_top(99).is_none());
        assert_eq!(registry.max_z_index(), counter_before);
    }

    #[test]
    fn test_explicit_z_index_bumps_counter() {
        let mut registry = OverlayRegistry::new();
        registry.register(make_overlay(1, 200));
        registry.register(make_overlay(2, 0));

        // Selektion von 2 muss ueber der expliziten Prioritaet von 1 landen
        let z = registry.raise_to_top(2).expect("Overlay vorhanden");
        assert!(z > 200);
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let mut registry = OverlayRegistry::new();
        // Absichtlich nicht in ID-Reihenfolge registriert
        registry.register(make_overlay(3, 0));
        registry.register(make_overlay(1, 0));
        registry.register(make_overlay(2, 0));

        let ids: Vec<OverlayId> = registry.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
