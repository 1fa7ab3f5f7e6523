pub mod config; // Compile-time tunables
pub mod mixer; // Selection, volume merge and animation state machine
pub mod pulse; // Sound server status parsing and volume commands
pub mod render; // Pure text frame rendering
pub mod runtime; // Terminal shell: event loop and drawing
pub mod stream;

pub use config::MixerConfig;
pub use mixer::{Command, Event, MixerState};
pub use stream::Stream;

/// Upper bound of every stream volume, in percent.
pub const MAX_VOLUME: u8 = 100;
