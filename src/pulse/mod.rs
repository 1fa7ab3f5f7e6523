// Purpose - talking to the sound server: status text in, volume commands out

pub mod controller;
pub mod daemon;
pub mod parser;

pub use controller::VolumeController;
pub use daemon::{AudioDaemon, DaemonError, Pactl};
pub use parser::parse;
