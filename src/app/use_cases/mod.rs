//! Use-Case-Funktionen: die eigentliche Mutationslogik auf dem AppState.

pub mod editing;
pub mod opacity;
pub mod registration;
pub mod selection;
pub mod view;
