//! Einlesen des statischen Overlay-Katalogs.
//!
//! Der Katalog ist eine geordnete JSON-Liste von Overlay-Definitionen,
//! wird einmal beim Start gelesen und danach nie veraendert.

use anyhow::Context;

use crate::core::OverlaySpec;

/// Parst den Overlay-Katalog aus JSON.
///
/// Die Reihenfolge der Eintraege bleibt erhalten; sie bestimmt die
/// vergebenen Overlay-IDs und die Standard-Stapelung.
pub fn parse_overlay_catalog(json: &str) -> anyhow::Result<Vec<OverlaySpec>> {
    let specs: Vec<OverlaySpec> =
        serde_json::from_str(json).context("Overlay-Katalog konnte nicht gelesen werden")?;
    log::info!("{} Overlay-Definitionen geladen", specs.len());
    Ok(specs)
}
