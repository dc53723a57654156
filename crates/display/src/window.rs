use std::any::Any;
use std::sync::Arc;

use crouton_primitives::{EjectDirection, Point};

use crate::notification::NotificationView;

/// Type-erased handle to the owner/parent surface of the host window.
///
/// The display layer never inspects it; the window factory downcasts to the
/// concrete toolkit type it was built for.
#[derive(Clone)]
pub struct OwnerHandle(Arc<dyn Any + Send + Sync>);

impl OwnerHandle {
	pub fn new<T: Any + Send + Sync>(owner: T) -> Self {
		Self(Arc::new(owner))
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.0.downcast_ref()
	}
}

/// The single on-screen container surface holding visible notification
/// views.
///
/// The supervisor guarantees every mutation is invoked from its owning
/// thread. Layout and animation internals live behind the implementation.
pub trait HostWindow: Send + Sync {
	fn set_min_height(&self, height: f64);
	fn set_height(&self, height: f64);
	fn width(&self) -> f64;
	fn height(&self) -> f64;
	fn set_position(&self, position: Point);
	fn set_eject_direction(&self, direction: EjectDirection);

	/// Adds a notification view to the visible set.
	fn show_notification(&self, view: Arc<dyn NotificationView>);

	/// Detaches a notification view from the visible set.
	fn close_notification(&self, view: Arc<dyn NotificationView>);

	fn show(&self);
	fn close(&self);
}

/// Builds the host window on first display, parented to the owner surface.
pub type HostWindowFactory = Box<dyn Fn(OwnerHandle) -> Arc<dyn HostWindow> + Send + Sync>;
