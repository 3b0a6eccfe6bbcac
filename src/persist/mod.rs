//! Key-Value-Persistenz des Kartenausschnitts ueber Sessions hinweg.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gespeicherter Kartenausschnitt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedViewState {
    /// Zentrum (Breite)
    pub lat: f64,
    /// Zentrum (Laenge)
    pub lng: f64,
    /// Zoomstufe
    pub zoom: f64,
}

/// Persistenz-Schnittstelle zum Storage-Kollaborateur.
///
/// Jedes `save` ueberschreibt den vorherigen Stand vollstaendig; es
/// gibt kein Merging und keine Versionierung. Ein fehlender Stand ist
/// kein Fehler, sondern `None`.
pub trait ViewStateStore {
    /// Laedt den zuletzt gespeicherten Ausschnitt, falls vorhanden.
    fn load(&self) -> Option<SavedViewState>;

    /// Speichert den Ausschnitt.
    fn save(&mut self, view: &SavedViewState) -> anyhow::Result<()>;
}

/// In-Memory-Store fuer Tests und Hosts ohne Persistenz.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    slot: Option<SavedViewState>,
}

impl MemoryStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewStateStore for MemoryStore {
    fn load(&self) -> Option<SavedViewState> {
        self.slot
    }

    fn save(&mut self, view: &SavedViewState) -> anyhow::Result<()> {
        self.slot = Some(*view);
        Ok(())
    }
}

/// Dateibasierter Store: eine JSON-Datei, die bei jedem `save`
/// komplett ueberschrieben wird.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Erstellt einen Store fuer den angegebenen Pfad.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pfad der Zustandsdatei.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ViewStateStore for JsonFileStore {
    fn load(&self) -> Option<SavedViewState> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(view) => Some(view),
            Err(e) => {
                log::warn!("Gespeicherter Ansichtszustand fehlerhaft, wird ignoriert: {}", e);
                None
            }
        }
    }

    fn save(&mut self, view: &SavedViewState) -> anyhow::Result<()> {
        let content = serde_json::to_string(view)?;
        std::fs::write(&self.path, content).with_context(|| {
            format!(
                "Ansichtszustand konnte nicht geschrieben werden: {}",
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_state_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "omaps_view_state_{}_{}.json",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.load().is_none());

        let view = SavedViewState {
            lat: 60.0,
            lng: 31.0,
            zoom: 12.0,
        };
        store.save(&view).expect("Speichern sollte funktionieren");
        assert_eq!(store.load(), Some(view));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = temp_state_path("roundtrip");
        let view = SavedViewState {
            lat: 60.0,
            lng: 31.0,
            zoom: 12.0,
        };

        {
            let mut store = JsonFileStore::new(&path);
            store.save(&view).expect("Speichern sollte funktionieren");
        }

        // Neuer Store auf derselben Datei simuliert einen Neustart
        let store = JsonFileStore::new(&path);
        assert_eq!(store.load(), Some(view));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_missing_file_is_absent_not_error() {
        let store = JsonFileStore::new(temp_state_path("missing"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_file_store_corrupt_content_is_absent() {
        let path = temp_state_path("corrupt");
        std::fs::write(&path, "kein json").expect("Testdatei schreibbar");

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let mut store = MemoryStore::new();
        store
            .save(&SavedViewState {
                lat: 59.9,
                lng: 30.3,
                zoom: 11.0,
            })
            .unwrap();
        store
            .save(&SavedViewState {
                lat: 60.0,
                lng: 31.0,
                zoom: 12.0,
            })
            .unwrap();

        let loaded = store.load().expect("Stand vorhanden");
        assert_eq!(loaded.lat, 60.0);
        assert_eq!(loaded.zoom, 12.0);
    }
}
