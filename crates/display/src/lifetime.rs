use std::sync::Arc;

use crate::notification::Notification;
use crate::subscription::SubscriptionId;

/// Observer for lifetime events.
///
/// One registration covers both events; they are added and removed as a
/// unit.
pub trait LifetimeObserver: Send + Sync {
	/// A notification should become visible.
	fn show_requested(&self, notification: Arc<dyn Notification>);

	/// A notification should be closed (explicit command or capacity
	/// eviction).
	fn close_requested(&self, notification: Arc<dyn Notification>);
}

/// Owner of notification queuing, expiry, and priority policy.
pub trait LifetimeManager: Send + Sync {
	/// Registers an observer for show/close events.
	fn subscribe(&self, observer: Arc<dyn LifetimeObserver>) -> SubscriptionId;

	/// Removes a registration. Unknown ids are ignored.
	fn unsubscribe(&self, id: SubscriptionId);

	/// Finalizes bookkeeping for a closed notification. Fire-and-forget.
	fn notification_closed(&self, notification: Arc<dyn Notification>);
}
