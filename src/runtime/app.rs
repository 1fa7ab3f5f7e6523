//! Volmix - application builder and event loop

use std::time::{Duration, Instant};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use super::{keys, ui};
use crate::{
    config::MixerConfig,
    mixer::{Command, Event, MixerState},
    pulse::{AudioDaemon, Pactl, VolumeController},
    render::render,
};

/// How long to wait for input when no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application builder
pub struct Volmix<D = Pactl> {
    daemon: D,
    config: MixerConfig,
}

impl Volmix<Pactl> {
    /// Create a mixer talking to the local server through `pactl`
    pub fn new() -> Self {
        Self {
            daemon: Pactl::new(),
            config: MixerConfig::default(),
        }
    }
}

impl Default for Volmix<Pactl> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: AudioDaemon> Volmix<D> {
    /// Talk to a different server backend
    pub fn daemon<E: AudioDaemon>(self, daemon: E) -> Volmix<E> {
        Volmix {
            daemon,
            config: self.config,
        }
    }

    /// Set the animation tick period
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.config.tick_interval = interval;
        self
    }

    /// Set the percent change per volume key press
    pub fn volume_step(mut self, step: i32) -> Self {
        self.config.volume_step = step;
        self
    }

    /// Set the width of the name column, ellipsis included
    pub fn name_width(mut self, width: usize) -> Self {
        self.config.name_width = width;
        self
    }

    /// Set the columns kept free of the bar and its narrowest width
    pub fn bar_layout(mut self, padding: u16, min_width: u16) -> Self {
        self.config.bar_padding = padding;
        self.config.min_bar_width = min_width;
        self
    }

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let terminal = ratatui::init();
        let result = self.event_loop(terminal);
        ratatui::restore();
        result
    }

    fn event_loop(self, mut terminal: DefaultTerminal) -> EyreResult<()> {
        let volumes = VolumeController::new(self.daemon);
        let state = MixerState::load(&volumes, self.config);
        info!(streams = state.streams().len(), "mixer started");

        let size = terminal.size().wrap_err("failed to read terminal size")?;
        let mut next_tick = schedule(state.init());
        let (mut state, _) = state.update(
            Event::Resize {
                width: size.width,
                height: size.height,
            },
            &volumes,
        );

        loop {
            terminal
                .draw(|frame| ui::draw(frame, &render(&state)))
                .wrap_err("failed to draw frame")?;

            let Some(event) = next_event(&mut next_tick)? else {
                continue;
            };

            let (next, command) = state.update(event, &volumes);
            state = next;
            match command {
                Command::None => {}
                Command::ScheduleTick(_) => next_tick = schedule(command),
                Command::Quit => {
                    debug!("quit requested");
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Deadline for a scheduled tick, if the command asks for one
fn schedule(command: Command) -> Option<Instant> {
    match command {
        Command::ScheduleTick(delay) => Some(Instant::now() + delay),
        Command::None | Command::Quit => None,
    }
}

/// Wait for the next input or the pending tick, whichever comes first
fn next_event(next_tick: &mut Option<Instant>) -> EyreResult<Option<Event>> {
    let timeout = next_tick.map_or(IDLE_POLL, |at| {
        at.saturating_duration_since(Instant::now())
    });

    if event::poll(timeout).wrap_err("failed to poll terminal events")? {
        let raw = event::read().wrap_err("failed to read terminal event")?;
        return Ok(keys::translate(raw));
    }

    match *next_tick {
        Some(at) if Instant::now() >= at => {
            *next_tick = None;
            Ok(Some(Event::Tick))
        }
        _ => Ok(None),
    }
}
