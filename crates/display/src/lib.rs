//! Toast display coordination: one host window, one owning thread.
//!
//! The [`DisplaySupervisor`] mediates between a lifetime manager (when
//! notifications appear and close), a position provider (where the host
//! window sits and which direction views stack), and the single shared host
//! window. Collaborators stay behind traits; this crate owns only the
//! coordination.

/// Lifetime manager contract and its event observer.
pub mod lifetime;
/// Notification handles and their displayable view part.
pub mod notification;
/// Position provider contract and its event observer.
pub mod position;
/// Registration tokens for collaborator event sources.
pub mod subscription;
/// The display supervisor core.
pub mod supervisor;
/// Host window adapter surface.
pub mod window;

pub use lifetime::{LifetimeManager, LifetimeObserver};
pub use notification::{CloseCallback, Notification, NotificationView};
pub use position::{PositionObserver, PositionProvider};
pub use subscription::SubscriptionId;
pub use supervisor::{CLOSE_DETACH_DELAY, DisplaySupervisor};
pub use window::{HostWindow, HostWindowFactory, OwnerHandle};
