//! The rendering side of the contact form
//!
//! The workflow never touches markup. It describes what should be shown
//! through a [`FormSurface`]; a DOM binding, a terminal or a test recorder
//! decides how.

use folio_forms::FieldState;
use serde::Serialize;
use std::sync::Mutex;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
	Success,
	Failure,
}

/// Status line shown under the form after a submission settles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
	pub text: String,
	pub tone: StatusTone,
}

impl StatusMessage {
	pub fn success() -> Self {
		Self {
			text: SUCCESS_MESSAGE.to_string(),
			tone: StatusTone::Success,
		}
	}

	pub fn failure() -> Self {
		Self {
			text: FAILURE_MESSAGE.to_string(),
			tone: StatusTone::Failure,
		}
	}

	/// CSS class list of the status element
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::surface::StatusMessage;
	///
	/// assert_eq!(StatusMessage::success().css_class(), "form-status success");
	/// assert_eq!(StatusMessage::failure().css_class(), "form-status error");
	/// ```
	pub fn css_class(&self) -> &'static str {
		match self.tone {
			StatusTone::Success => "form-status success",
			StatusTone::Failure => "form-status error",
		}
	}
}

/// Write side of the form UI.
///
/// Implementations must not call back into the workflow; they are invoked
/// while the workflow holds its state lock.
pub trait FormSurface: Send + Sync {
	/// Replace the error decoration of one field with `state`
	fn reflect_field(&self, name: &str, state: &FieldState);

	/// Show or hide the busy indicator and disable or enable submit
	fn set_busy(&self, busy: bool);

	/// Show a status message, or clear it with `None`
	fn show_status(&self, status: Option<&StatusMessage>);

	/// Empty every input
	fn clear_values(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
	Field { name: String, state: FieldState },
	Busy(bool),
	Status(Option<StatusMessage>),
	ValuesCleared,
}

/// Surface that records every call, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingSurface {
	events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
	pub fn new() -> Self {
		Self::default()
	}

	fn push(&self, event: SurfaceEvent) {
		self.events
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.push(event);
	}

	pub fn events(&self) -> Vec<SurfaceEvent> {
		self.events
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	/// Drain the recorded events
	pub fn take_events(&self) -> Vec<SurfaceEvent> {
		std::mem::take(&mut *self.events.lock().unwrap_or_else(|e| e.into_inner()))
	}

	/// Current busy indicator (last value set)
	pub fn is_busy(&self) -> bool {
		self.events()
			.iter()
			.rev()
			.find_map(|event| match event {
				SurfaceEvent::Busy(busy) => Some(*busy),
				_ => None,
			})
			.unwrap_or(false)
	}

	/// Status message currently displayed
	pub fn status(&self) -> Option<StatusMessage> {
		self.events()
			.into_iter()
			.rev()
			.find_map(|event| match event {
				SurfaceEvent::Status(status) => Some(status),
				_ => None,
			})
			.flatten()
	}

	/// Error message currently displayed next to `name`
	pub fn field_message(&self, name: &str) -> Option<String> {
		self.events()
			.into_iter()
			.rev()
			.find_map(|event| match event {
				SurfaceEvent::Field { name: n, state } if n == name => Some(state),
				_ => None,
			})
			.and_then(|state| state.message().map(str::to_string))
	}
}

impl FormSurface for RecordingSurface {
	fn reflect_field(&self, name: &str, state: &FieldState) {
		self.push(SurfaceEvent::Field {
			name: name.to_string(),
			state: state.clone(),
		});
	}

	fn set_busy(&self, busy: bool) {
		self.push(SurfaceEvent::Busy(busy));
	}

	fn show_status(&self, status: Option<&StatusMessage>) {
		self.push(SurfaceEvent::Status(status.cloned()));
	}

	fn clear_values(&self) {
		self.push(SurfaceEvent::ValuesCleared);
	}
}
