//! Terminal UI: board view with a column selector and status messages.

mod app;
mod game_view;

pub use app::{App, UiConfig};
