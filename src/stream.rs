//! Stream - one application's controllable playback channel

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MAX_VOLUME;

/// An audio-producing application stream as reported by the sound server
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stream {
    /// Server-assigned identifier, only stable for the current server session
    pub id: String,
    /// Application name, else media name, else empty
    pub name: String,
    /// Authoritative volume in percent (0-100)
    pub volume: u8,
    /// Animated volume shown in the bar; never sent back to the server
    pub display_volume: u8,
}

impl Stream {
    /// Create a stream whose display value already matches its volume
    pub fn new(id: impl Into<String>, name: impl Into<String>, volume: i64) -> Self {
        let volume = clamp_percent(volume);
        Self {
            id: id.into(),
            name: name.into(),
            volume,
            display_volume: volume,
        }
    }

    /// Move the display value one step toward the volume.
    ///
    /// Returns `true` if the display value changed.
    pub fn step_display(&mut self) -> bool {
        match self.display_volume.cmp(&self.volume) {
            std::cmp::Ordering::Less => {
                self.display_volume += 1;
                true
            }
            std::cmp::Ordering::Greater => {
                self.display_volume -= 1;
                true
            }
            std::cmp::Ordering::Equal => false,
        }
    }
}

/// Clamp any integer into the `[0, 100]` percent domain
pub fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, MAX_VOLUME as i64) as u8
}
