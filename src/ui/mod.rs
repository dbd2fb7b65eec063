//! UI-Komponenten: Menü, Statusleiste, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
