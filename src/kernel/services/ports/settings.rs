use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::kernel::catalog::{Catalog, DesignVariant};

pub const DEFAULT_PERSIST_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_REQUEST_COUNT: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_variants")]
    pub variants: Vec<DesignVariant>,
    /// Delay before a state change is written back; `0` writes on every change.
    #[serde(default = "default_persist_debounce_ms")]
    pub persist_debounce_ms: u64,
    #[serde(default = "default_request_count")]
    pub default_request_count: u32,
}

impl Settings {
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.variants.iter().cloned())
    }

    pub fn persist_debounce(&self) -> Duration {
        Duration::from_millis(self.persist_debounce_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variants: default_variants(),
            persist_debounce_ms: DEFAULT_PERSIST_DEBOUNCE_MS,
            default_request_count: DEFAULT_REQUEST_COUNT,
        }
    }
}

fn default_variants() -> Vec<DesignVariant> {
    [
        "Editorial",
        "Split hero",
        "Case-study led",
        "Minimal grid",
        "Pricing first",
        "Dark terminal",
    ]
    .into_iter()
    .zip(1u32..)
    .map(|(label, id)| DesignVariant::new(id, format!("/redesign/{id}"), label))
    .collect()
}

fn default_persist_debounce_ms() -> u64 {
    DEFAULT_PERSIST_DEBOUNCE_MS
}

fn default_request_count() -> u32 {
    DEFAULT_REQUEST_COUNT
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
