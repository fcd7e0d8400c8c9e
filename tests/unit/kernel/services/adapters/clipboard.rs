use super::*;
use crate::kernel::{Catalog, DesignVariant, ReviewState, VariantId};

fn composed_prompt() -> String {
    let catalog = Catalog::new([
        DesignVariant::new(1, "/redesign/1", "Editorial"),
        DesignVariant::new(2, "/redesign/2", "Bento"),
    ]);
    let mut state = ReviewState::default();
    state.favorites.insert(VariantId::new(2));
    state.feedback.insert(VariantId::new(2), "keep the grid".to_string());
    crate::kernel::compose_prompt(&state, &catalog, 3)
}

fn decode_payload(seq: &str, open: &str, close: &str) -> String {
    let b64 = seq
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .unwrap();
    String::from_utf8(STANDARD.decode(b64).unwrap()).unwrap()
}

#[test]
fn prompt_round_trips_through_the_escape() {
    let prompt = composed_prompt();
    let seq = prompt_sequence(&prompt, Osc52Env::terminal()).unwrap();
    assert_eq!(decode_payload(&seq, OSC52_OPEN, OSC52_CLOSE), prompt);
}

#[test]
fn tmux_wraps_the_escape_in_passthrough() {
    let prompt = composed_prompt();
    let env = Osc52Env {
        is_tmux: true,
        is_terminal: true,
    };
    let seq = prompt_sequence(&prompt, env).unwrap();
    assert_eq!(decode_payload(&seq, TMUX_OPEN, TMUX_CLOSE), prompt);
}

#[test]
fn oversized_prompt_is_rejected() {
    let big = "x".repeat(OSC52_MAX_BYTES + 1);
    let err = prompt_sequence(&big, Osc52Env::terminal()).unwrap_err();
    assert_eq!(
        err,
        ClipboardError::TooLarge {
            bytes: OSC52_MAX_BYTES + 1,
            limit: OSC52_MAX_BYTES,
        }
    );
}

#[test]
fn terminal_sink_writes_the_escape() {
    let prompt = composed_prompt();
    let mut clipboard = Osc52Clipboard::new(Vec::new(), Osc52Env::terminal());
    clipboard.set_text(&prompt).unwrap();

    let written = String::from_utf8(clipboard.into_inner()).unwrap();
    assert_eq!(decode_payload(&written, OSC52_OPEN, OSC52_CLOSE), prompt);
}

#[test]
fn non_terminal_sink_writes_nothing() {
    let mut clipboard = Osc52Clipboard::new(Vec::new(), Osc52Env::default());
    assert_eq!(
        clipboard.set_text(&composed_prompt()),
        Err(ClipboardError::NotAvailable)
    );
    assert!(clipboard.into_inner().is_empty());
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn clipboard_sink_reports_io_failures() {
    let mut clipboard = Osc52Clipboard::new(BrokenPipe, Osc52Env::terminal());
    assert!(matches!(
        clipboard.set_text("hello"),
        Err(ClipboardError::Io(_))
    ));
}
