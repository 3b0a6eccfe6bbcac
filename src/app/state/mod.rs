//! Anwendungszustand, aufgeteilt in View-, Selektions- und
//! Bearbeitungs-Teilzustaende.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use editor::{CommittedFrame, ControlPointBinding, EditorState};
pub use selection::SelectionState;
pub use view::ViewState;
