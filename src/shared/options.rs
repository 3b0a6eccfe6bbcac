//! Zentrale Konfiguration fuer die Overlay-Engine.
//!
//! `EngineOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Rahmen-Ableitung ───────────────────────────────────────────────

/// Breitengrad pro Pixel Bildhoehe (Flache-Erde-Faktor).
pub const MULTI_X: f64 = 1e-5;
/// Laengengrad pro Pixel Bildbreite (Flache-Erde-Faktor).
pub const MULTI_Y: f64 = 2e-5;

// ── Kartenausschnitt ───────────────────────────────────────────────

/// Standard-Zentrum (Breite).
pub const DEFAULT_CENTER_LAT: f64 = 59.944179;
/// Standard-Zentrum (Laenge).
pub const DEFAULT_CENTER_LNG: f64 = 30.320337;
/// Standard-Zoomstufe.
pub const DEFAULT_ZOOM: f64 = 11.0;
/// Minimale Zoomstufe.
pub const ZOOM_MIN: f64 = 8.0;
/// Maximale Zoomstufe.
pub const ZOOM_MAX: f64 = 18.0;

// ── Bearbeitung ────────────────────────────────────────────────────

/// Deckkraft im Bearbeitungsmodus.
pub const EDIT_OPACITY: f64 = 0.5;

// ── Gruppen ────────────────────────────────────────────────────────

/// Tag der schaltbaren Rogaining-Gruppe.
pub const GROUP_TAG_ROGAINE: &str = "ROGAINE";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Engine-Optionen.
/// Wird als `omaps_overlay_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    // ── Rahmen-Ableitung ────────────────────────────────────────
    /// Breitengrad pro Pixel Bildhoehe
    pub multi_x: f64,
    /// Laengengrad pro Pixel Bildbreite
    pub multi_y: f64,

    // ── Kartenausschnitt ────────────────────────────────────────
    /// Standard-Zentrum (Breite)
    pub default_center_lat: f64,
    /// Standard-Zentrum (Laenge)
    pub default_center_lng: f64,
    /// Standard-Zoomstufe
    pub default_zoom: f64,
    /// Minimale Zoomstufe
    pub zoom_min: f64,
    /// Maximale Zoomstufe
    pub zoom_max: f64,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Deckkraft beim Eintritt in den Bearbeitungsmodus
    pub edit_opacity: f64,

    // ── Gruppen ─────────────────────────────────────────────────
    /// Tags, die eine Gruppenzugehoerigkeit ausloesen
    #[serde(default = "default_group_tags")]
    pub group_tags: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            multi_x: MULTI_X,
            multi_y: MULTI_Y,

            default_center_lat: DEFAULT_CENTER_LAT,
            default_center_lng: DEFAULT_CENTER_LNG,
            default_zoom: DEFAULT_ZOOM,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,

            edit_opacity: EDIT_OPACITY,

            group_tags: default_group_tags(),
        }
    }
}

/// Serde-Default fuer `group_tags` (Abwaertskompatibilitaet bestehender TOML-Dateien).
fn default_group_tags() -> Vec<String> {
    vec![GROUP_TAG_ROGAINE.to_string()]
}

impl EngineOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("omaps_overlay_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("omaps_overlay_editor.toml")
    }
}
