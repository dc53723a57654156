use std::sync::Arc;

use crouton_primitives::{EjectDirection, Point};

use crate::subscription::SubscriptionId;
use crate::window::OwnerHandle;

/// Observer for reposition requests, e.g. on screen or work-area changes.
pub trait PositionObserver: Send + Sync {
	fn reposition_requested(&self);
}

/// Owner of screen-coordinate and stacking policy for the host window.
pub trait PositionProvider: Send + Sync {
	/// Height for the host window, applied at creation.
	fn height(&self) -> f64;

	/// Computes the window position for the given window size.
	///
	/// May return [`Point::UNSET`] before layout is known.
	fn position(&self, window_width: f64, window_height: f64) -> Point;

	/// Current stacking direction for new notification views.
	fn eject_direction(&self) -> EjectDirection;

	/// Owner surface the host window is parented to.
	fn parent(&self) -> OwnerHandle;

	/// Registers an observer for reposition requests.
	fn subscribe(&self, observer: Arc<dyn PositionObserver>) -> SubscriptionId;

	/// Removes a registration. Unknown ids are ignored.
	fn unsubscribe(&self, id: SubscriptionId);
}
