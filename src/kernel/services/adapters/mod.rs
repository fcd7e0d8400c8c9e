//! Service adapters: OS specific implementations (filesystem, terminal).

pub mod clipboard;
pub mod paths;
pub mod settings;
pub mod storage;

pub use clipboard::{Osc52Clipboard, Osc52Env};
pub use paths::{ensure_log_dir, ensure_state_dir, get_config_dir, get_log_dir, get_state_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, read_settings, SettingsError,
};
pub use storage::{FileStorage, MemoryStorage};
