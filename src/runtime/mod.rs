//! Terminal runtime for the mixer.
//!
//! This module provides the `Volmix` builder, which owns the terminal,
//! turns key presses and resizes into mixer events, runs the animation
//! timer and draws every frame.
//!
//! # Example
//!
//! ```ignore
//! use volmix::runtime::Volmix;
//!
//! fn main() -> color_eyre::Result<()> {
//!     color_eyre::install()?;
//!     Volmix::new().volume_step(5).run()
//! }
//! ```

mod app;
pub mod keys;
mod ui;

pub use app::Volmix;
