//! Mixer state machine
//!
//! The whole UI model is one `MixerState` value. Each input event is folded
//! into it by `update`, which hands the state back together with a `Command`
//! for the surrounding event loop (schedule the next tick, or quit).
//!
//! Two ways of absorbing server data exist and they are deliberately
//! different:
//!
//! - `merge_volumes` (after a volume key) copies volumes into the rows that
//!   already exist. Rows whose stream has ended stay visible.
//! - `replace_streams` (startup and `Refresh`) rebuilds the list from the
//!   report, keeping the animated value of streams that survived.
//!
//! The cursor follows the selected stream's id across either path and falls
//! back to the nearest valid index when that stream is gone.

mod selection;

use std::time::Duration;

use tracing::debug;

pub use selection::{clamp_selection, select_next, select_prev};

use crate::config::MixerConfig;
use crate::pulse::{AudioDaemon, VolumeController};
use crate::stream::Stream;

/// Input delivered by the event source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Resize { width: u16, height: u16 },
    MoveUp,
    MoveDown,
    IncreaseVolume,
    DecreaseVolume,
    /// Rebuild the stream list from the server
    Refresh,
    /// Animation timer fired
    Tick,
    Quit,
}

/// What the event loop should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    /// Deliver `Event::Tick` after this delay
    ScheduleTick(Duration),
    Quit,
}

/// Size of the display surface in cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MixerState {
    streams: Vec<Stream>,
    selected: usize,
    viewport: Viewport,
    config: MixerConfig,
}

impl MixerState {
    /// Build the initial state from a stream report
    pub fn new(streams: Vec<Stream>, config: MixerConfig) -> Self {
        let mut state = Self {
            streams: Vec::new(),
            selected: 0,
            viewport: Viewport::default(),
            config,
        };
        state.replace_streams(streams);
        state
    }

    /// Build the initial state from a fresh server query
    pub fn load<D: AudioDaemon>(volumes: &VolumeController<D>, config: MixerConfig) -> Self {
        Self::new(volumes.streams(), config)
    }

    /// Command to issue before the first event: start the animation timer
    pub fn init(&self) -> Command {
        Command::ScheduleTick(self.config.tick_interval)
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Index of the highlighted row, `None` when there are no streams
    pub fn selected(&self) -> Option<usize> {
        (!self.streams.is_empty()).then_some(self.selected)
    }

    pub fn selected_stream(&self) -> Option<&Stream> {
        self.streams.get(self.selected)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    /// Fold one event into the state
    pub fn update<D: AudioDaemon>(
        mut self,
        event: Event,
        volumes: &VolumeController<D>,
    ) -> (Self, Command) {
        let command = match event {
            Event::Resize { width, height } => {
                self.viewport = Viewport { width, height };
                Command::None
            }
            Event::MoveUp => {
                if !self.is_empty() {
                    select_prev(&mut self.selected);
                }
                Command::None
            }
            Event::MoveDown => {
                if !self.is_empty() {
                    select_next(&mut self.selected, self.streams.len());
                }
                Command::None
            }
            Event::IncreaseVolume => {
                self.adjust_selected(volumes, self.config.volume_step);
                Command::None
            }
            Event::DecreaseVolume => {
                self.adjust_selected(volumes, -self.config.volume_step);
                Command::None
            }
            Event::Refresh => {
                self.replace_streams(volumes.streams());
                Command::None
            }
            Event::Tick => {
                self.tick();
                Command::ScheduleTick(self.config.tick_interval)
            }
            Event::Quit => Command::Quit,
        };
        (self, command)
    }

    fn adjust_selected<D: AudioDaemon>(&mut self, volumes: &VolumeController<D>, delta: i32) {
        let Some(id) = self.selected_stream().map(|stream| stream.id.clone()) else {
            return;
        };
        volumes.adjust(&id, delta);
        self.merge_volumes(&volumes.streams());
    }

    /// Copy reported volumes into existing rows, matched by id.
    ///
    /// Rows the report doesn't mention are left untouched and new streams in
    /// the report are not added.
    pub fn merge_volumes(&mut self, reported: &[Stream]) {
        for stream in &mut self.streams {
            if let Some(fresh) = reported.iter().find(|fresh| fresh.id == stream.id) {
                stream.volume = fresh.volume.min(crate::MAX_VOLUME);
            }
        }
    }

    /// Replace the stream list with `reported`.
    ///
    /// Streams that were already shown keep their animated value so the bar
    /// glides to the new volume; new streams start settled.
    pub fn replace_streams(&mut self, reported: Vec<Stream>) {
        let selected_id = self.selected_stream().map(|stream| stream.id.clone());

        let streams: Vec<Stream> = reported
            .into_iter()
            .map(|mut fresh| {
                fresh.volume = fresh.volume.min(crate::MAX_VOLUME);
                fresh.display_volume = self
                    .streams
                    .iter()
                    .find(|old| old.id == fresh.id)
                    .map_or(fresh.volume, |old| old.display_volume)
                    .min(crate::MAX_VOLUME);
                fresh
            })
            .collect();
        debug!(before = self.streams.len(), after = streams.len(), "replaced streams");
        self.streams = streams;

        if let Some(index) = selected_id
            .and_then(|id| self.streams.iter().position(|stream| stream.id == id))
        {
            self.selected = index;
        }
        clamp_selection(&mut self.selected, self.streams.len());
    }

    /// Advance every display value one unit toward its volume.
    ///
    /// Returns `true` if any bar moved.
    pub fn tick(&mut self) -> bool {
        self.streams
            .iter_mut()
            .fold(false, |moved, stream| stream.step_display() || moved)
    }
}
