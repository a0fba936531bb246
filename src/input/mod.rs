pub mod handler;
pub mod keymap;
pub mod text_input;

pub use handler::handle_key;
pub use keymap::help_text;
pub use text_input::TextInput;
