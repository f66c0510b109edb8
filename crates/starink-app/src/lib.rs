//! StarInk Application
//!
//! The demo shell providing windowing, input handling, and the gallery UI
//! that exercises the rating widget.

mod app;
mod ui;

pub use app::{App, AppConfig, ShellError};
pub use ui::{render_ui, UiState};
