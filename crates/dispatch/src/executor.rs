//! Single owning-thread job executor with blocking hand-off.
//!
//! # Design
//!
//! Callers on arbitrary threads submit closures and block until the owning
//! thread has run them, so submission order is execution order and effects
//! are visible when [`UiExecutor::dispatch`] returns. A dispatch from the
//! owning thread itself runs inline rather than deadlocking on its own queue.
//!
//! A panicking job is caught on the owning thread, carried back, and resumed
//! on the calling thread; the owning thread keeps draining later jobs.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc as completion;
use std::thread::{self, JoinHandle, ThreadId};

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::mpsc;

/// Dispatch failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
	/// The owning thread has shut down and accepts no further work.
	#[error("owning thread has terminated")]
	Terminated,
}

struct Job {
	run: Box<dyn FnOnce() + Send>,
}

/// Executor that owns one named OS thread and runs submitted jobs on it.
///
/// Dropping the executor shuts it down and joins the owning thread.
pub struct UiExecutor {
	tx: Mutex<Option<mpsc::UnboundedSender<Job>>>,
	thread: Mutex<Option<JoinHandle<()>>>,
	thread_id: ThreadId,
	name: String,
}

impl UiExecutor {
	/// Spawns the owning thread under the given name.
	pub fn spawn(name: impl Into<String>) -> io::Result<Self> {
		let name = name.into();
		let (tx, rx) = mpsc::unbounded_channel();
		let handle = thread::Builder::new().name(name.clone()).spawn(move || run_loop(rx))?;
		let thread_id = handle.thread().id();
		tracing::debug!(thread = %name, "dispatch.spawn");
		Ok(Self {
			tx: Mutex::new(Some(tx)),
			thread: Mutex::new(Some(handle)),
			thread_id,
			name,
		})
	}

	/// Runs `f` on the owning thread and blocks until it completes.
	///
	/// Runs inline when already called from the owning thread. If `f` panics,
	/// the payload is resumed on the calling thread and the owning thread
	/// survives.
	pub fn dispatch<F, R>(&self, f: F) -> Result<R, DispatchError>
	where
		F: FnOnce() -> R + Send + 'static,
		R: Send + 'static,
	{
		if thread::current().id() == self.thread_id {
			tracing::trace!(thread = %self.name, "dispatch.inline");
			return Ok(f());
		}

		let Some(tx) = self.tx.lock().clone() else {
			return Err(DispatchError::Terminated);
		};

		let (done_tx, done_rx) = completion::sync_channel(1);
		let job = Job {
			run: Box::new(move || {
				let result = panic::catch_unwind(AssertUnwindSafe(f));
				let _ = done_tx.send(result);
			}),
		};
		tracing::trace!(thread = %self.name, "dispatch.submit");
		tx.send(job).map_err(|_| DispatchError::Terminated)?;

		match done_rx.recv() {
			Ok(Ok(value)) => Ok(value),
			Ok(Err(payload)) => panic::resume_unwind(payload),
			// Job dropped unexecuted: queue torn down mid-shutdown.
			Err(_) => Err(DispatchError::Terminated),
		}
	}

	/// Closes the queue and joins the owning thread. Idempotent.
	///
	/// Already-queued jobs still run before the thread exits. When called
	/// from the owning thread itself the join is skipped.
	pub fn shutdown(&self) {
		if self.tx.lock().take().is_none() {
			return;
		}
		tracing::debug!(thread = %self.name, "dispatch.shutdown");

		if thread::current().id() == self.thread_id {
			return;
		}
		if let Some(handle) = self.thread.lock().take() {
			let _ = handle.join();
		}
	}
}

impl Drop for UiExecutor {
	fn drop(&mut self) {
		self.shutdown();
	}
}

fn run_loop(mut rx: mpsc::UnboundedReceiver<Job>) {
	while let Some(job) = rx.blocking_recv() {
		(job.run)();
	}
}

#[cfg(test)]
mod tests {
	use std::panic::catch_unwind;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	#[test]
	fn runs_on_owning_named_thread() {
		let executor = UiExecutor::spawn("ui-test").unwrap();
		let name = executor.dispatch(|| thread::current().name().map(String::from)).unwrap();
		assert_eq!(name.as_deref(), Some("ui-test"));
	}

	#[test]
	fn blocking_handoff_returns_job_result() {
		let executor = UiExecutor::spawn("ui-test").unwrap();
		let counter = Arc::new(AtomicUsize::new(0));
		let c = Arc::clone(&counter);
		let out = executor.dispatch(move || {
			c.fetch_add(1, Ordering::SeqCst);
			41 + 1
		});
		assert_eq!(out, Ok(42));
		assert_eq!(counter.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn jobs_run_in_submission_order() {
		let executor = UiExecutor::spawn("ui-test").unwrap();
		let seen = Arc::new(Mutex::new(Vec::new()));
		for i in 0..10 {
			let s = Arc::clone(&seen);
			executor.dispatch(move || s.lock().push(i)).unwrap();
		}
		assert_eq!(*seen.lock(), (0..10).collect::<Vec<_>>());
	}

	#[test]
	fn reentrant_dispatch_runs_inline() {
		let executor = Arc::new(UiExecutor::spawn("ui-test").unwrap());
		let inner = Arc::clone(&executor);
		let out = executor.dispatch(move || inner.dispatch(|| 7).unwrap()).unwrap();
		assert_eq!(out, 7);
	}

	#[test]
	fn dispatch_after_shutdown_is_terminated() {
		let executor = UiExecutor::spawn("ui-test").unwrap();
		executor.shutdown();
		executor.shutdown();
		assert_eq!(executor.dispatch(|| ()), Err(DispatchError::Terminated));
	}

	#[test]
	fn panicking_job_resumes_on_caller_and_thread_survives() {
		let executor = UiExecutor::spawn("ui-test").unwrap();
		let result = catch_unwind(AssertUnwindSafe(|| {
			executor.dispatch(|| {
				panic!("boom");
			})
		}));
		assert!(result.is_err());
		assert_eq!(executor.dispatch(|| 5), Ok(5));
	}
}
