// Application state and the key handling that mutates it

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{ExportActions, ExportError, ExportFormat};
pub use input::handle_input;
pub use state::App;
