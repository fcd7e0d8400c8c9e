//! Service ports: traits + data contracts.

pub mod clipboard;
pub mod settings;
pub mod storage;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use settings::Settings;
pub use storage::{StateStorage, StorageError, REVIEW_STATE_KEY};
