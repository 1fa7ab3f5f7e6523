//! Volume controller - clamped relative adjustments with fresh read-back
//!
//! The controller never trusts cached state: every adjustment re-reads the
//! server, computes the absolute clamped target and sends only the delta
//! needed to reach it. Server failures are logged and absorbed.

use tracing::{debug, warn};

use super::daemon::AudioDaemon;
use super::parser::parse;
use crate::stream::{clamp_percent, Stream};

pub struct VolumeController<D> {
    daemon: D,
}

impl<D: AudioDaemon> VolumeController<D> {
    pub fn new(daemon: D) -> Self {
        Self { daemon }
    }

    pub fn daemon(&self) -> &D {
        &self.daemon
    }

    /// Current sink inputs, or an empty list if the server can't be queried
    pub fn streams(&self) -> Vec<Stream> {
        match self.daemon.list_sink_inputs() {
            Ok(text) => {
                let streams = parse(&text);
                debug!(count = streams.len(), "listed sink inputs");
                streams
            }
            Err(err) => {
                warn!("listing sink inputs failed: {err}");
                Vec::new()
            }
        }
    }

    /// Volume of `id` as the server reports it now; unknown ids read as 0
    pub fn current_volume(&self, id: &str) -> u8 {
        self.streams()
            .into_iter()
            .find(|stream| stream.id == id)
            .map_or(0, |stream| stream.volume)
    }

    /// Shift `id` by `delta` percent, clamped to [0, 100].
    ///
    /// Returns the effective delta sent to the server; 0 means no command
    /// was issued.
    pub fn adjust(&self, id: &str, delta: i32) -> i32 {
        let current = self.current_volume(id);
        let target = clamp_percent(i64::from(current) + i64::from(delta));
        let effective = i32::from(target) - i32::from(current);
        if effective == 0 {
            return 0;
        }

        debug!(id, current, target, effective, "shifting sink input volume");
        if let Err(err) = self.daemon.shift_volume(id, effective) {
            warn!("setting volume of sink input {id} failed: {err}");
        }
        effective
    }
}
