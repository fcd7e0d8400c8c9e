//! Application layer: sessions that connect the kernel to concrete adapters.

pub mod session;

pub use session::ReviewSession;
