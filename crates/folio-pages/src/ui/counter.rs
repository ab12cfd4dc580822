//! Stat counters, counted up once when the about section first scrolls
//! into view

use super::in_view;
use std::time::Duration;

/// Counter animation length
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// One animation frame at ~60fps
pub const FRAME: Duration = Duration::from_millis(16);

/// Stat numbers counting up from zero
#[derive(Debug, Clone)]
pub struct StatCounters {
	targets: Vec<u32>,
	animated: bool,
}

impl StatCounters {
	pub fn new(targets: impl IntoIterator<Item = u32>) -> Self {
		Self {
			targets: targets.into_iter().collect(),
			animated: false,
		}
	}

	pub fn is_animated(&self) -> bool {
		self.animated
	}

	/// One animation per stat, the first time the about section is in view
	pub fn on_scroll(
		&mut self,
		section_top: f64,
		viewport_height: f64,
	) -> Option<Vec<CounterAnimation>> {
		if self.animated || !in_view(section_top, viewport_height) {
			return None;
		}
		self.animated = true;
		Some(self.targets.iter().map(|&t| CounterAnimation::new(t)).collect())
	}
}

/// Frame-by-frame values of one counter.
///
/// Yields `floor(current)` each frame while below the target, then the
/// target itself once, then ends.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
	target: u32,
	increment: f64,
	current: f64,
	done: bool,
}

impl CounterAnimation {
	pub fn new(target: u32) -> Self {
		let frames = COUNTER_DURATION.as_millis() as f64 / FRAME.as_millis() as f64;
		Self {
			target,
			increment: f64::from(target) / frames,
			current: 0.0,
			done: false,
		}
	}

	pub fn target(&self) -> u32 {
		self.target
	}
}

impl Iterator for CounterAnimation {
	type Item = u32;

	fn next(&mut self) -> Option<u32> {
		if self.done {
			return None;
		}
		self.current += self.increment;
		if self.current < f64::from(self.target) {
			Some(self.current.floor() as u32)
		} else {
			self.done = true;
			Some(self.target)
		}
	}
}
