//! Display supervisor: host-window lifecycle and show/close sequencing.
//!
//! # Design
//!
//! The supervisor mediates between the lifetime manager (when notifications
//! appear and close), the position provider (where the window sits and which
//! direction views stack), and the single host window. Every window mutation
//! is marshaled through one [`UiExecutor`] so the window only ever changes on
//! its owning thread; callers block until the marshaled action completes.
//!
//! Closing a view is two-phase: the close transition runs immediately, the
//! structural detach follows after [`CLOSE_DETACH_DELAY`] so the exit
//! animation can finish. The detach re-enters the executor and tolerates a
//! window that is already gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use crouton_dispatch::{UiExecutor, delay};
use crouton_primitives::Point;
use parking_lot::Mutex;

use crate::lifetime::{LifetimeManager, LifetimeObserver};
use crate::notification::{Notification, NotificationView};
use crate::position::{PositionObserver, PositionProvider};
use crate::subscription::SubscriptionId;
use crate::window::{HostWindow, HostWindowFactory};

/// Gap between a view's close transition and its structural detach.
pub const CLOSE_DETACH_DELAY: Duration = Duration::from_millis(300);

/// Coordinates the on-screen lifecycle of notification views inside one
/// lazily-created host window.
///
/// Dropping the supervisor disposes it.
pub struct DisplaySupervisor {
	inner: Arc<Inner>,
}

struct Subscriptions {
	lifetime: SubscriptionId,
	position: SubscriptionId,
}

struct Inner {
	weak_self: Weak<Inner>,
	executor: Arc<UiExecutor>,
	position: Arc<dyn PositionProvider>,
	lifetime: Mutex<Option<Arc<dyn LifetimeManager>>>,
	factory: HostWindowFactory,
	window: Mutex<Option<Arc<dyn HostWindow>>>,
	subscriptions: Mutex<Option<Subscriptions>>,
	disposed: AtomicBool,
}

impl DisplaySupervisor {
	/// Wires the supervisor to its collaborators and registers for their
	/// events.
	pub fn new(
		executor: Arc<UiExecutor>,
		position: Arc<dyn PositionProvider>,
		lifetime: Arc<dyn LifetimeManager>,
		factory: HostWindowFactory,
	) -> Self {
		let inner = Arc::new_cyclic(|weak| Inner {
			weak_self: weak.clone(),
			executor,
			position: Arc::clone(&position),
			lifetime: Mutex::new(Some(Arc::clone(&lifetime))),
			factory,
			window: Mutex::new(None),
			subscriptions: Mutex::new(None),
			disposed: AtomicBool::new(false),
		});

		let lifetime_sub = lifetime.subscribe(Arc::new(LifetimeBridge {
			inner: Arc::downgrade(&inner),
		}));
		let position_sub = position.subscribe(Arc::new(PositionBridge {
			inner: Arc::downgrade(&inner),
		}));
		*inner.subscriptions.lock() = Some(Subscriptions {
			lifetime: lifetime_sub,
			position: position_sub,
		});

		Self { inner }
	}

	/// Requests that `notification` become visible.
	///
	/// Safe to call from any thread; blocks until the show has completed on
	/// the owning thread.
	pub fn display_notification(&self, notification: Arc<dyn Notification>) {
		self.inner.display(notification);
	}

	/// Tears the supervisor down: closes the host window, removes all event
	/// registrations, and releases the lifetime manager. Idempotent.
	pub fn dispose(&self) {
		self.inner.dispose();
	}
}

impl Drop for DisplaySupervisor {
	fn drop(&mut self) {
		self.inner.dispose();
	}
}

impl Inner {
	/// Upgrades the self back-reference for moving into a closure.
	///
	/// Always succeeds while any strong handle to the supervisor exists.
	fn strong(&self) -> Option<Arc<Inner>> {
		self.weak_self.upgrade()
	}

	fn display(&self, notification: Arc<dyn Notification>) {
		if self.disposed.load(Ordering::SeqCst) {
			tracing::warn!("display requested after dispose");
			return;
		}
		let Some(inner) = self.strong() else { return };
		if self.executor.dispatch(move || inner.display_on_owner(notification)).is_err() {
			tracing::trace!("display.show skipped: executor terminated");
		}
	}

	fn display_on_owner(&self, notification: Arc<dyn Notification>) {
		let Some(window) = self.ensure_window() else {
			return;
		};

		self.bind_and_show(&window, &notification);
		window.show();
		window.set_eject_direction(self.position.eject_direction());
		self.apply_position(&window);
		tracing::trace!("display.show");
	}

	/// Creates the host window at most once. Returns `None` once disposed.
	fn ensure_window(&self) -> Option<Arc<dyn HostWindow>> {
		let mut slot = self.window.lock();
		if let Some(window) = slot.as_ref() {
			return Some(Arc::clone(window));
		}
		if self.disposed.load(Ordering::SeqCst) {
			return None;
		}

		let window = (self.factory)(self.position.parent());
		let height = self.position.height();
		window.set_min_height(height);
		window.set_height(height);
		window.set_position(Point::UNSET);
		tracing::debug!(height, "display.window_created");
		*slot = Some(Arc::clone(&window));
		Some(window)
	}

	fn bind_and_show(&self, window: &Arc<dyn HostWindow>, notification: &Arc<dyn Notification>) {
		let weak = self.weak_self.clone();
		notification.bind_close(Arc::new(move |notification| {
			if let Some(inner) = weak.upgrade() {
				inner.begin_view_close(notification);
			}
		}));
		window.show_notification(notification.view());
	}

	/// Two-phase close: transition now, structural detach after the delay.
	///
	/// The window is deliberately not repositioned here; reflow during the
	/// exit animation would disturb it.
	fn begin_view_close(&self, notification: Arc<dyn Notification>) {
		if self.disposed.load(Ordering::SeqCst) {
			return;
		}

		let view = notification.view();
		view.begin_close();
		tracing::trace!("display.view_close");

		let weak = self.weak_self.clone();
		delay::execute(CLOSE_DETACH_DELAY, move || {
			if let Some(inner) = weak.upgrade() {
				inner.detach_view(view);
			}
		});
	}

	fn detach_view(&self, view: Arc<dyn NotificationView>) {
		let Some(inner) = self.strong() else { return };
		let outcome = self.executor.dispatch(move || {
			if let Some(window) = inner.window.lock().clone() {
				window.close_notification(view);
				tracing::trace!("display.detach");
			}
		});
		if outcome.is_err() {
			tracing::trace!("display.detach skipped: executor terminated");
		}
	}

	/// External close: finalize bookkeeping first, then reflow the window.
	fn close(&self, notification: Arc<dyn Notification>) {
		if self.disposed.load(Ordering::SeqCst) {
			return;
		}
		let Some(inner) = self.strong() else { return };
		if self.executor.dispatch(move || inner.close_on_owner(notification)).is_err() {
			tracing::trace!("display.close skipped: executor terminated");
		}
	}

	fn close_on_owner(&self, notification: Arc<dyn Notification>) {
		let lifetime = self.lifetime.lock().clone();
		if let Some(lifetime) = lifetime {
			lifetime.notification_closed(notification);
			tracing::trace!("display.close_finalized");
		}
		if let Some(window) = self.window.lock().clone() {
			self.apply_position(&window);
		}
	}

	fn reposition(&self) {
		if self.disposed.load(Ordering::SeqCst) {
			return;
		}
		let Some(inner) = self.strong() else { return };
		let _ = self.executor.dispatch(move || {
			if let Some(window) = inner.window.lock().clone() {
				inner.apply_position(&window);
			}
		});
	}

	fn apply_position(&self, window: &Arc<dyn HostWindow>) {
		let position = self.position.position(window.width(), window.height());
		window.set_position(position);
		tracing::trace!(x = position.x, y = position.y, "display.reposition");
	}

	fn dispose(&self) {
		if self.disposed.swap(true, Ordering::SeqCst) {
			return;
		}
		tracing::debug!("display.dispose");

		let window = self.window.lock().take();
		if let Some(window) = window
			&& self.executor.dispatch(move || window.close()).is_err()
		{
			tracing::trace!("display.dispose: executor already terminated");
		}

		let subscriptions = self.subscriptions.lock().take();
		let lifetime = self.lifetime.lock().take();
		if let Some(subscriptions) = subscriptions {
			if let Some(lifetime) = &lifetime {
				lifetime.unsubscribe(subscriptions.lifetime);
			}
			self.position.unsubscribe(subscriptions.position);
		}
	}
}

struct LifetimeBridge {
	inner: Weak<Inner>,
}

impl LifetimeObserver for LifetimeBridge {
	fn show_requested(&self, notification: Arc<dyn Notification>) {
		if let Some(inner) = self.inner.upgrade() {
			inner.display(notification);
		}
	}

	fn close_requested(&self, notification: Arc<dyn Notification>) {
		if let Some(inner) = self.inner.upgrade() {
			inner.close(notification);
		}
	}
}

struct PositionBridge {
	inner: Weak<Inner>,
}

impl PositionObserver for PositionBridge {
	fn reposition_requested(&self) {
		if let Some(inner) = self.inner.upgrade() {
			inner.reposition();
		}
	}
}
