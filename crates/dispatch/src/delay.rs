//! One-shot delayed actions without blocking the caller.

use std::sync::OnceLock;
use std::time::Duration;

fn runtime_handle() -> tokio::runtime::Handle {
	if let Ok(handle) = tokio::runtime::Handle::try_current() {
		return handle;
	}

	static GLOBAL_RT: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	let runtime = GLOBAL_RT.get_or_init(|| {
		tokio::runtime::Builder::new_multi_thread()
			.enable_time()
			.worker_threads(1)
			.thread_name("crouton-delay")
			.build()
			.expect("failed to build crouton-dispatch global tokio runtime")
	});
	runtime.handle().clone()
}

/// Runs `action` once after at least `delay` has elapsed.
///
/// Returns immediately. The action runs on an unspecified runtime thread;
/// work that touches owning-thread state must re-enter a
/// [`UiExecutor`](crate::UiExecutor) itself. The delay is a best-effort
/// minimum, not a deadline.
pub fn execute<F>(delay: Duration, action: F)
where
	F: FnOnce() + Send + 'static,
{
	tracing::trace!(delay_ms = delay.as_millis() as u64, "delay.schedule");
	runtime_handle().spawn(async move {
		tokio::time::sleep(delay).await;
		action();
	});
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;
	use std::time::Instant;

	use super::*;

	#[test]
	fn fires_after_delay_without_blocking_caller() {
		let (tx, rx) = mpsc::channel();
		let start = Instant::now();
		execute(Duration::from_millis(100), move || {
			let _ = tx.send(Instant::now());
		});
		assert!(start.elapsed() < Duration::from_millis(50), "execute must not block");

		let fired_at = rx.recv_timeout(Duration::from_secs(5)).unwrap();
		assert!(fired_at.duration_since(start) >= Duration::from_millis(100));
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn uses_ambient_runtime_when_present() {
		let (tx, rx) = mpsc::channel();
		execute(Duration::from_millis(20), move || {
			let _ = tx.send(());
		});
		tokio::time::sleep(Duration::from_millis(300)).await;
		assert!(rx.try_recv().is_ok());
	}
}
