//! Feature-Handler: Dispatch-Ziele des Controllers.

pub mod editing;
pub mod registration;
pub mod selection;
pub mod view;
