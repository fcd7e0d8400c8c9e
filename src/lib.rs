//! redesign-review - review tool for generated homepage design variants.
//!
//! Module layout:
//! - kernel: headless review core (catalog, state, actions, effects, prompt)
//! - kernel::services: ports (storage, clipboard, settings) and their adapters
//! - app: review session wiring the kernel to storage and clipboard

pub mod app;
pub mod kernel;
