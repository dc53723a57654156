//! Owning-thread execution primitives for the toast display stack.
//!
//! [`UiExecutor`] funnels all host-window mutation onto one dedicated OS
//! thread with a blocking hand-off; [`delay`] runs one-shot actions after a
//! fixed delay, off the critical path.

/// One-shot delayed action scheduling.
pub mod delay;
/// Dedicated owning-thread job executor.
pub mod executor;

pub use executor::{DispatchError, UiExecutor};
