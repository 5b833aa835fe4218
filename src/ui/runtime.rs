use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::Event;

use super::subscriptions::InputSubscriptions;
use super::{App, HostOutcome};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Mount `app` on the terminal and run it until the user quits.
pub fn run(mut app: App) -> Result<HostOutcome> {
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<HostOutcome> {
		let mut terminal = ratatui::init();
		let result: Result<HostOutcome> = terminal.clear().map_err(Into::into).and_then(|()| {
			let subscriptions = InputSubscriptions::acquire()?;
			let outcome = self.event_loop(&mut terminal, &subscriptions);
			let released = subscriptions.release();
			let outcome = outcome?;
			released?;
			Ok(outcome)
		});
		ratatui::restore();

		if let Ok(outcome) = &result {
			tracing::info!(visited = outcome.visited.len(), "search host exited");
		}
		result
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		subscriptions: &InputSubscriptions,
	) -> Result<HostOutcome> {
		let mut pending_events = VecDeque::new();

		loop {
			self.widget.tick(Instant::now());
			terminal.draw(|frame| self.draw(frame))?;

			while let Some(event) = subscriptions.try_next()? {
				pending_events.push_back(event);
			}

			let outcome = self.dispatch_pending(&mut pending_events, |app| {
				terminal.draw(|frame| app.draw(frame))?;
				Ok(())
			})?;
			if let Some(outcome) = outcome {
				return Ok(outcome);
			}

			thread::sleep(FRAME_INTERVAL);
		}
	}

	/// Handle queued events in order.
	///
	/// A mode change moves targets around, so `redraw` refreshes the hit map
	/// before the next queued event is resolved against it.
	pub(crate) fn dispatch_pending<F>(
		&mut self,
		pending: &mut VecDeque<Event>,
		mut redraw: F,
	) -> Result<Option<HostOutcome>>
	where
		F: FnMut(&mut Self) -> Result<()>,
	{
		while let Some(event) = pending.pop_front() {
			let before = self.widget.mode();
			if let Some(outcome) = self.handle_event(event) {
				return Ok(Some(outcome));
			}
			if self.widget.mode() != before && !pending.is_empty() {
				redraw(self)?;
			}
		}
		Ok(None)
	}
}
