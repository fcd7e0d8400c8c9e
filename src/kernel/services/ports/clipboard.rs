#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    NotAvailable,
    #[error("text too large for clipboard ({} KB, limit {} KB)", .bytes / 1024, .limit / 1024)]
    TooLarge { bytes: usize, limit: usize },
    #[error("io error: {0}")]
    Io(String),
}

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: ClipboardSink + ?Sized> ClipboardSink for Box<C> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}
