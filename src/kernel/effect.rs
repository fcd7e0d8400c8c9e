#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The review state changed and should be written back to storage.
    PersistState,
    SetClipboardText(String),
}
