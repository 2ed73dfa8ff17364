//! Voice command adapter
//!
//! [`VoiceFilter`] turns raw recognizer transcripts into validated commands:
//! keyword extraction with common-misfire aliases, consecutive-match
//! confirmation and an accept cooldown, publishing into a shared
//! [`CommandSlot`]. The filter is pure logic — audio capture and model
//! inference live entirely outside this crate.
//!
//! [`VoiceSource`] is the capability-checked command source the driver asks
//! for: it reports unavailable at construction when no recognizer backend is
//! present, so callers can fall back to keyboard control instead of failing.

use std::time::{Duration, Instant};

use super::source::{CommandSlot, CommandSource};
use crate::game::{Command, Direction};

const REQUIRED_CONSECUTIVE_MATCHES: u32 = 2;
const ACCEPT_COOLDOWN: Duration = Duration::from_millis(500);

/// Noise filter between a speech recognizer and the command slot.
pub struct VoiceFilter {
    slot: CommandSlot,
    required_matches: u32,
    cooldown: Duration,
    candidate: Option<Command>,
    consecutive: u32,
    last_accepted: Option<Instant>,
}

impl VoiceFilter {
    pub fn new(slot: CommandSlot) -> Self {
        Self {
            slot,
            required_matches: REQUIRED_CONSECUTIVE_MATCHES,
            cooldown: ACCEPT_COOLDOWN,
            candidate: None,
            consecutive: 0,
            last_accepted: None,
        }
    }

    /// Feed one recognizer transcript. A command is published only after the
    /// same command has been heard `required_matches` times in a row and the
    /// cooldown since the last accepted command has elapsed.
    pub fn push_transcript(&mut self, text: &str, now: Instant) {
        let Some(command) = extract_command(text) else {
            // Garbage resets the confirmation streak.
            self.candidate = None;
            self.consecutive = 0;
            return;
        };

        if self.candidate == Some(command) {
            self.consecutive += 1;
        } else {
            self.candidate = Some(command);
            self.consecutive = 1;
        }

        let cooled_down = self
            .last_accepted
            .map_or(true, |at| now.duration_since(at) >= self.cooldown);

        if self.consecutive >= self.required_matches && cooled_down {
            self.slot.publish(command);
            self.last_accepted = Some(now);
        }
    }
}

/// Map a normalized transcript to a command, tolerating the recognizer's
/// usual near-misses ("app" for up, "write" for right).
fn extract_command(text: &str) -> Option<Command> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    if text.contains("up") || text.contains("app") {
        Some(Command::Move(Direction::Up))
    } else if text.contains("down") {
        Some(Command::Move(Direction::Down))
    } else if text.contains("left") {
        Some(Command::Move(Direction::Left))
    } else if text.contains("right") || text.contains("write") {
        Some(Command::Move(Direction::Right))
    } else if text.contains("restart") || text.contains("start") || text.contains("begin") {
        Some(Command::Restart)
    } else {
        None
    }
}

/// Voice-driven command source with an availability check.
///
/// No speech backend is linked into this build, so construction always yields
/// an unavailable source; the wiring (slot + filter) still works for an
/// external recognizer process feeding [`VoiceSource::filter`].
pub struct VoiceSource {
    slot: CommandSlot,
    available: bool,
    status: String,
}

impl VoiceSource {
    pub fn new() -> Self {
        Self {
            slot: CommandSlot::new(),
            available: false,
            status: "no speech recognizer backend available".to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// A filter publishing into this source's slot; hand it to the
    /// recognizer thread.
    pub fn filter(&self) -> VoiceFilter {
        VoiceFilter::new(self.slot.clone())
    }
}

impl Default for VoiceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSource for VoiceSource {
    fn poll(&mut self) -> Option<Command> {
        self.slot.take()
    }
}
