//! Command sources: keyboard events and the voice-command adapter

pub mod handler;
pub mod source;
pub mod voice;

pub use handler::{InputHandler, KeyAction};
pub use source::{CommandSlot, CommandSource};
pub use voice::{VoiceFilter, VoiceSource};
