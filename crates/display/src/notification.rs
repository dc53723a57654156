use std::sync::Arc;

/// Callback a view invokes when it wants to self-close, e.g. on timeout or
/// user dismissal inside the view.
pub type CloseCallback = Arc<dyn Fn(Arc<dyn Notification>) + Send + Sync>;

/// Displayable part of a notification. Opaque to the display layer apart
/// from its close transition.
pub trait NotificationView: Send + Sync {
	/// Starts the visual close transition.
	fn begin_close(&self);
}

/// One toast, created and owned by the lifetime manager.
///
/// The display layer holds only transient handles: it binds itself as the
/// close-callback target at display time and drops the handle once the
/// operation completes.
pub trait Notification: Send + Sync {
	/// Returns the displayable view part.
	fn view(&self) -> Arc<dyn NotificationView>;

	/// Binds the callback the view invokes to request its own close.
	fn bind_close(&self, on_close: CloseCallback);
}
