//! Prompt clipboard via OSC 52.
//!
//! The composed prompt is base64 encoded into an OSC 52 escape sequence and
//! written to the terminal, which places it on the system clipboard. Inside
//! tmux the sequence is wrapped in a DCS passthrough. When the writer is not
//! a terminal (stdout piped into a file) nothing is written and the copy is
//! reported as unavailable, so the escape never lands in redirected output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::{self, IsTerminal, Write};

use crate::kernel::services::ports::{ClipboardError, ClipboardSink};

const OSC52_OPEN: &str = "\x1b]52;c;";
const OSC52_CLOSE: &str = "\x07";

const TMUX_OPEN: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const TMUX_CLOSE: &str = "\x07\x1b\\";

// Terminals cap OSC 52 payloads; a prompt over the whole catalog stays far below this.
pub const OSC52_MAX_BYTES: usize = 100 * 1024;

/// Where the escape sequence goes and how it must be framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Osc52Env {
    pub is_tmux: bool,
    pub is_terminal: bool,
}

impl Osc52Env {
    /// Terminal settings for the process stdout.
    pub fn detect() -> Self {
        Self {
            is_tmux: std::env::var_os("TMUX").is_some(),
            is_terminal: io::stdout().is_terminal(),
        }
    }

    pub fn terminal() -> Self {
        Self {
            is_tmux: false,
            is_terminal: true,
        }
    }
}

/// Frames `prompt` as a clipboard escape for `env`.
pub fn prompt_sequence(prompt: &str, env: Osc52Env) -> Result<String, ClipboardError> {
    if prompt.len() > OSC52_MAX_BYTES {
        return Err(ClipboardError::TooLarge {
            bytes: prompt.len(),
            limit: OSC52_MAX_BYTES,
        });
    }

    let (open, close) = if env.is_tmux {
        (TMUX_OPEN, TMUX_CLOSE)
    } else {
        (OSC52_OPEN, OSC52_CLOSE)
    };
    Ok(format!("{open}{}{close}", STANDARD.encode(prompt)))
}

pub struct Osc52Clipboard<W: Write> {
    writer: W,
    env: Osc52Env,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Osc52Env::detect())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W, env: Osc52Env) -> Self {
        Self { writer, env }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.env.is_terminal {
            return Err(ClipboardError::NotAvailable);
        }
        let seq = prompt_sequence(text, self.env)?;
        self.writer
            .write_all(seq.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| ClipboardError::Io(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;
