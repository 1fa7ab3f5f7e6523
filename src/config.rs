//! Mixer tunables
//!
//! There is no config file and no command line: these defaults are the
//! behavior of the shipped binary. The `Volmix` builder can override them.

use std::time::Duration;

/// Animation cadence: one display step per tick
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Percent added or removed per left/right key press
pub const VOLUME_STEP: i32 = 2;

/// Columns reserved for the stream name, ellipsis included
pub const NAME_WIDTH: usize = 15;

/// Columns of a row not available to the bar
pub const BAR_PADDING: u16 = 25;

/// Narrowest bar drawn, whatever the viewport
pub const MIN_BAR_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixerConfig {
    pub tick_interval: Duration,
    pub volume_step: i32,
    pub name_width: usize,
    pub bar_padding: u16,
    pub min_bar_width: u16,
}

impl MixerConfig {
    /// Bar width for a viewport `width` columns wide
    pub fn bar_width(&self, width: u16) -> u16 {
        width
            .saturating_sub(self.bar_padding)
            .max(self.min_bar_width)
    }
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            volume_step: VOLUME_STEP,
            name_width: NAME_WIDTH,
            bar_padding: BAR_PADDING,
            min_bar_width: MIN_BAR_WIDTH,
        }
    }
}
