// sessionfiddle services
// Services read, transform and render session data.

pub mod format_emitter;
pub mod grid_packer;
pub mod group_extractor;
pub mod session_document;
pub mod settings_engine;
