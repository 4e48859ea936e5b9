//! Speech-synthesis collaborators.
//!
//! A [`SpeechSynthesizer`] receives one [`SpeechRequest`] per speak action and
//! returns as soon as the utterance is handed off. Playback, voice availability
//! and overlapping utterances are the engine's business.

use anyhow::{anyhow, Context, Result};
use std::io;
use std::process::{Command, Stdio};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::request::SpeechRequest;

/// Engine that speaks a request without blocking on playback.
pub trait SpeechSynthesizer {
    /// Hands off one utterance.
    fn speak(&self, request: SpeechRequest) -> Result<()>;

    /// Short engine name for logs.
    fn name(&self) -> &str;
}

/// Host speech commands, in the order [`SystemSynthesizer::new`] tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemBackend {
    /// `spd-say` from speech-dispatcher.
    SpeechDispatcher,
    EspeakNg,
}

impl SystemBackend {
    pub const ALL: [SystemBackend; 2] = [SystemBackend::SpeechDispatcher, SystemBackend::EspeakNg];

    /// Standard executable name.
    pub fn program(self) -> &'static str {
        match self {
            SystemBackend::SpeechDispatcher => "spd-say",
            SystemBackend::EspeakNg => "espeak-ng",
        }
    }

    /// Command-line arguments speaking `request` with this backend.
    ///
    /// The text always follows `--`, so a message starting with `-` is spoken
    /// rather than parsed as an option.
    pub fn args(self, request: &SpeechRequest) -> Vec<String> {
        let mut args = match self {
            SystemBackend::SpeechDispatcher => vec![
                "-l".to_string(),
                request.language_tag().to_string(),
                "-r".to_string(),
                spd_rate(request.rate()).to_string(),
                "-p".to_string(),
                spd_pitch(request.pitch()).to_string(),
            ],
            SystemBackend::EspeakNg => vec![
                "-v".to_string(),
                request.language_tag().to_ascii_lowercase(),
                "-s".to_string(),
                espeak_speed(request.rate()).to_string(),
                "-p".to_string(),
                espeak_pitch(request.pitch()).to_string(),
            ],
        };
        args.push("--".to_string());
        args.push(request.text().to_string());
        args
    }
}

/// spd-say rate, -100..=100 with 0 at the default rate.
fn spd_rate(rate: f32) -> i32 {
    ((rate - 0.5) * 200.0).round() as i32
}

/// spd-say pitch, -100..=100 with 0 at a multiplier of 1.0.
fn spd_pitch(pitch: f32) -> i32 {
    let offset = if pitch < 1.0 {
        (pitch - 1.0) * 200.0
    } else {
        (pitch - 1.0) * 100.0
    };
    offset.round() as i32
}

/// espeak-ng words per minute, 175 at the default rate.
fn espeak_speed(rate: f32) -> u32 {
    (80.0 + rate * 190.0).round() as u32
}

/// espeak-ng pitch, 0..=99 with 50 at a multiplier of 1.0.
fn espeak_pitch(pitch: f32) -> u32 {
    let value = if pitch < 1.0 {
        (pitch - 0.5) * 100.0
    } else {
        50.0 + (pitch - 1.0) * 49.0
    };
    value.round().clamp(0.0, 99.0) as u32
}

/// A backend paired with the executable that runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCommand {
    pub backend: SystemBackend,
    pub program: String,
}

impl SystemCommand {
    /// Uses the backend's standard executable name.
    pub fn new(backend: SystemBackend) -> Self {
        Self::with_program(backend, backend.program())
    }

    /// Uses `program` (a name on `PATH` or a full path) for `backend`.
    pub fn with_program(backend: SystemBackend, program: impl Into<String>) -> Self {
        Self {
            backend,
            program: program.into(),
        }
    }

    fn spawn(&self, request: &SpeechRequest) -> io::Result<()> {
        let mut child = Command::new(&self.program)
            .args(self.backend.args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // Reap in the background so the caller never waits on playback.
        let program = self.program.clone();
        std::thread::spawn(move || {
            if let Err(e) = child.wait() {
                warn!(program = %program, "speech process wait failed: {e}");
            }
        });
        Ok(())
    }
}

/// Speaks through a host TTS command, one child process per utterance.
///
/// Commands are tried in order. A command that is not installed is skipped;
/// any other spawn failure is returned without trying the rest.
#[derive(Debug, Clone)]
pub struct SystemSynthesizer {
    commands: Vec<SystemCommand>,
}

impl Default for SystemSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSynthesizer {
    /// Tries `spd-say`, then `espeak-ng`.
    pub fn new() -> Self {
        Self::with_commands(SystemBackend::ALL.iter().copied().map(SystemCommand::new))
    }

    /// Uses a single backend with its standard executable.
    pub fn with_backend(backend: SystemBackend) -> Self {
        Self::with_commands([SystemCommand::new(backend)])
    }

    /// Tries `commands` in the given order.
    pub fn with_commands(commands: impl IntoIterator<Item = SystemCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    pub fn commands(&self) -> &[SystemCommand] {
        &self.commands
    }
}

impl SpeechSynthesizer for SystemSynthesizer {
    fn speak(&self, request: SpeechRequest) -> Result<()> {
        for command in &self.commands {
            match command.spawn(&request) {
                Ok(()) => {
                    debug!(
                        program = %command.program,
                        language = request.language_tag(),
                        "handed off utterance"
                    );
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(program = %command.program, "speech command not installed");
                }
                Err(e) => {
                    warn!(program = %command.program, "failed to start speech command: {e}");
                    return Err(e).with_context(|| format!("Failed to start {}", command.program));
                }
            }
        }

        let tried = self
            .commands
            .iter()
            .map(|command| command.program.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Err(anyhow!("No system TTS command found (tried {tried})"))
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Keeps every request it receives instead of speaking it.
#[derive(Debug, Default)]
pub struct RecordingSynthesizer {
    requests: Mutex<Vec<SpeechRequest>>,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Most recent request.
    pub fn last(&self) -> Option<SpeechRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn speak(&self, request: SpeechRequest) -> Result<()> {
        self.requests
            .lock()
            .map_err(|_| anyhow!("Recording synthesizer lock poisoned"))?
            .push(request);
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
