//! Headless review core (state/action/effect).

pub mod action;
pub mod catalog;
pub mod effect;
pub mod prompt;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use catalog::{Catalog, DesignVariant, VariantId};
pub use effect::Effect;
pub use prompt::{clamp_request_count, compose_prompt};
pub use state::ReviewState;
pub use store::{DispatchResult, Store};
