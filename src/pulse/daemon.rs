//! Invocation surface of the sound server
//!
//! Two primitives are needed: list the current sink inputs as status text,
//! and shift one sink input's volume by a signed percentage.

use std::process::{Command, Output};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaemonError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    Status {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Access to a PulseAudio-compatible sound server
pub trait AudioDaemon {
    /// Raw status text describing every sink input
    fn list_sink_inputs(&self) -> Result<String, DaemonError>;

    /// Change a sink input's volume by `delta` percent (may be negative)
    fn shift_volume(&self, id: &str, delta: i32) -> Result<(), DaemonError>;
}

impl<D: AudioDaemon + ?Sized> AudioDaemon for &D {
    fn list_sink_inputs(&self) -> Result<String, DaemonError> {
        (**self).list_sink_inputs()
    }

    fn shift_volume(&self, id: &str, delta: i32) -> Result<(), DaemonError> {
        (**self).shift_volume(id, delta)
    }
}

/// The `pactl` command line client
#[derive(Debug, Clone)]
pub struct Pactl {
    program: String,
}

impl Pactl {
    pub fn new() -> Self {
        Self::with_program("pactl")
    }

    /// Use a different executable, e.g. an absolute path or a wrapper script
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output, DaemonError> {
        let command = format!("{} {}", self.program, args.join(" "));
        // Property keys and labels are localized; the parser expects the C ones.
        let output = Command::new(&self.program)
            .args(args)
            .env("LC_ALL", "C")
            .output()
            .map_err(|source| DaemonError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DaemonError::Status {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl Default for Pactl {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDaemon for Pactl {
    fn list_sink_inputs(&self) -> Result<String, DaemonError> {
        let output = self.run(&["list", "sink-inputs"])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn shift_volume(&self, id: &str, delta: i32) -> Result<(), DaemonError> {
        // `--` keeps a negative amount from being read as an option.
        self.run(&["set-sink-input-volume", "--", id, &relative_percent(delta)])?;
        Ok(())
    }
}

/// `pactl` relative volume argument, e.g. `+2%` or `-4%`
pub fn relative_percent(delta: i32) -> String {
    format!("{delta:+}%")
}
