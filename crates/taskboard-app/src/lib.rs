//! Application layer for taskboard.
//!
//! Sits between a user interface and [`taskboard_core::TaskStore`]: the
//! [`Controller`] turns user events into store calls, and [`ViewSync`]
//! projects the resulting changes onto whatever implements the surface traits.

pub mod controller;
pub mod surface;
pub mod view_sync;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use controller::{Controller, Outcome, RowButton};
pub use surface::{FormSurface, MessageKey, Notifier, RowAffordances, RowSurface, Severity, SubmitLabel};
pub use view_sync::ViewSync;
