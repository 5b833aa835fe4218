//! Global input subscriptions held for as long as the widget is mounted.
//!
//! Acquiring [`InputSubscriptions`] starts a reader thread that forwards
//! terminal events over a channel and, for a real terminal, enables mouse
//! capture. Both are released when the guard is dropped, whatever state the
//! widget was left in.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Blocking source of terminal events.
pub trait EventSource: Send + 'static {
	fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
	fn read(&mut self) -> io::Result<Event>;
}

/// Events read from the process terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
	fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
		event::poll(timeout)
	}

	fn read(&mut self) -> io::Result<Event> {
		event::read()
	}
}

/// Scoped ownership of the event reader thread and mouse capture.
pub struct InputSubscriptions {
	running: Arc<AtomicBool>,
	reader: Option<JoinHandle<io::Result<()>>>,
	events: mpsc::Receiver<Event>,
	mouse_captured: bool,
}

impl InputSubscriptions {
	/// Subscribe to the process terminal, including mouse events.
	pub fn acquire() -> Result<Self> {
		execute!(io::stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;
		let mut subscriptions = Self::spawn(TerminalEvents);
		subscriptions.mouse_captured = true;
		tracing::debug!("input subscriptions acquired");
		Ok(subscriptions)
	}

	/// Subscribe to an arbitrary event source without touching the terminal.
	pub fn spawn<S: EventSource>(mut source: S) -> Self {
		let (tx, events) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);

		let reader = thread::spawn(move || -> io::Result<()> {
			while flag.load(Ordering::Relaxed) {
				if source.poll(POLL_INTERVAL)? {
					let event = source.read()?;
					if tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		Self {
			running,
			reader: Some(reader),
			events,
			mouse_captured: false,
		}
	}

	/// Next pending event, if any.
	///
	/// Fails once the reader thread has exited and every queued event has
	/// been drained.
	pub fn try_next(&self) -> Result<Option<Event>> {
		match self.events.try_recv() {
			Ok(event) => Ok(Some(event)),
			Err(mpsc::TryRecvError::Empty) => Ok(None),
			Err(mpsc::TryRecvError::Disconnected) => {
				Err(anyhow!("input event channel disconnected"))
			}
		}
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.reader.is_some()
	}

	/// Release the subscriptions, surfacing any reader failure.
	pub fn release(mut self) -> Result<()> {
		self.shutdown()
	}

	fn shutdown(&mut self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);

		let capture = if self.mouse_captured {
			self.mouse_captured = false;
			execute!(io::stdout(), DisableMouseCapture).context("failed to disable mouse capture")
		} else {
			Ok(())
		};

		let reader = match self.reader.take() {
			Some(handle) => match handle.join() {
				Ok(result) => result.context("input reader failed"),
				Err(_) => Err(anyhow!("input reader thread panicked")),
			},
			None => Ok(()),
		};

		capture.and(reader)
	}
}

impl Drop for InputSubscriptions {
	fn drop(&mut self) {
		if let Err(err) = self.shutdown() {
			tracing::warn!(error = %err, "failed to release input subscriptions");
		}
	}
}
