//! Contact form submission workflow
//!
//! ```text
//!          submit (valid)            transport Ok
//!  Idle ─────────────────▶ Submitting ─────────────▶ Succeeded ─┐
//!   ▲                          │                                 │
//!   │                          │ transport Err                   │ display
//!   │                          ▼                                 │ timeout
//!   │                        Failed ─────────────────────────────┤
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - A submit while `Submitting` is dropped, not queued.
//! - A submit that fails validation leaves the status untouched and never
//!   reaches the transport.
//! - Starting a new submission aborts the pending revert timer of the
//!   previous one, so an old timer cannot clear a newer message.
//! - The transport call runs on its own task: dropping the `submit` future
//!   does not strand the form in `Submitting`.

use crate::settings::PageSettings;
use crate::surface::{FormSurface, StatusMessage};
use crate::timer::{self, TimerHandle};
use crate::transport::{Submission, Transport, TransportError};
use folio_forms::{FieldUpdate, Form, FormResult, ValidationReport};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Submitting,
	Succeeded,
	Failed,
}

impl SubmissionStatus {
	/// No longer in flight
	pub fn is_settled(&self) -> bool {
		matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed)
	}
}

/// What a call to [`SubmissionWorkflow::submit`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// A submission was already in flight
	Ignored,
	/// Validation failed; nothing was sent
	Rejected(ValidationReport),
	Succeeded,
	Failed(TransportError),
}

struct WorkflowState {
	form: Form,
	status: SubmissionStatus,
	revert: Option<TimerHandle>,
	/// Incremented on every submission that reaches the transport
	cycle: u64,
}

/// Owns the contact form and drives it through a submission.
///
/// Cloning is cheap and every clone drives the same form.
#[derive(Clone)]
pub struct SubmissionWorkflow {
	state: Arc<Mutex<WorkflowState>>,
	transport: Arc<dyn Transport>,
	surface: Arc<dyn FormSurface>,
	display_timeout: Duration,
}

impl SubmissionWorkflow {
	pub const DEFAULT_DISPLAY_TIMEOUT: Duration = Duration::from_secs(5);

	pub fn new(form: Form, transport: Arc<dyn Transport>, surface: Arc<dyn FormSurface>) -> Self {
		Self {
			state: Arc::new(Mutex::new(WorkflowState {
				form,
				status: SubmissionStatus::Idle,
				revert: None,
				cycle: 0,
			})),
			transport,
			surface,
			display_timeout: Self::DEFAULT_DISPLAY_TIMEOUT,
		}
	}

	/// Contact form with the configured limits and display timeout
	pub fn from_settings(
		settings: &PageSettings,
		transport: Arc<dyn Transport>,
		surface: Arc<dyn FormSurface>,
	) -> Self {
		Self::new(
			Form::contact_with_limits(settings.limits),
			transport,
			surface,
		)
		.with_display_timeout(settings.submission.display_timeout())
	}

	pub fn with_display_timeout(mut self, timeout: Duration) -> Self {
		self.display_timeout = timeout;
		self
	}

	fn lock(&self) -> MutexGuard<'_, WorkflowState> {
		self.state.lock().unwrap_or_else(|e| e.into_inner())
	}

	pub fn status(&self) -> SubmissionStatus {
		self.lock().status
	}

	pub fn is_submitting(&self) -> bool {
		self.status() == SubmissionStatus::Submitting
	}

	/// Timer that will clear the current status message, if one is pending
	pub fn pending_revert(&self) -> Option<TimerHandle> {
		self.lock().revert.clone()
	}

	/// Whether every field is currently valid
	pub fn is_valid(&self) -> bool {
		self.lock().form.is_valid()
	}

	/// Current raw value of a field
	pub fn value(&self, name: &str) -> Option<String> {
		self.lock().form.get_field(name).map(|f| f.value.clone())
	}

	/// Input event: store the value, re-validate only a field in error
	pub fn input(&self, name: &str, value: impl Into<String>) -> FormResult<()> {
		let update = self.lock().form.input(name, value)?;
		if let Some(update) = update {
			self.reflect(std::slice::from_ref(&update));
		}
		Ok(())
	}

	/// Blur event: validate the field that lost focus
	pub fn blur(&self, name: &str) -> FormResult<()> {
		let update = self.lock().form.blur(name)?;
		self.reflect(std::slice::from_ref(&update));
		Ok(())
	}

	/// Keypress guard: Enter must not submit from a single-line input.
	///
	/// Returns `true` when the default action should be suppressed.
	pub fn suppress_enter(&self, focused_field: &str) -> FormResult<bool> {
		let state = self.lock();
		let field = state
			.form
			.get_field(focused_field)
			.ok_or_else(|| folio_forms::FormError::UnknownField(focused_field.to_string()))?;
		Ok(!field.kind.is_multiline())
	}

	fn reflect(&self, updates: &[FieldUpdate]) {
		for update in updates.iter().filter(|u| u.changed()) {
			self.surface.reflect_field(&update.name, &update.current);
		}
	}

	/// Validate the whole form and, if valid, send it.
	///
	/// Resolves when the submission has settled. The status message
	/// reverts to idle on its own after the display timeout.
	pub async fn submit(&self) -> SubmitOutcome {
		let (submission, cycle) = {
			let mut state = self.lock();

			if state.status == SubmissionStatus::Submitting {
				tracing::debug!(cycle = state.cycle, "submit ignored: submission in flight");
				return SubmitOutcome::Ignored;
			}

			let report = state.form.validate_all();
			self.reflect(&report.updates);
			if !report.all_valid {
				tracing::debug!(
					invalid = report.errors().count(),
					"submit rejected by validation"
				);
				return SubmitOutcome::Rejected(report);
			}

			if let Some(pending) = state.revert.take() {
				pending.cancel();
				tracing::debug!(cycle = state.cycle, "cancelled pending status revert");
			}

			state.cycle += 1;
			state.status = SubmissionStatus::Submitting;
			self.surface.show_status(None);
			self.surface.set_busy(true);
			tracing::info!(cycle = state.cycle, "submitting contact form");

			(Submission::new(state.form.values()), state.cycle)
		};

		let workflow = self.clone();
		let delivery = tokio::spawn(async move {
			let result = workflow.transport.submit(&submission).await;
			workflow.settle(cycle, result)
		});

		match delivery.await {
			Ok(outcome) => outcome,
			Err(error) => {
				// The transport panicked or the task was aborted
				self.settle(cycle, Err(TransportError::Unavailable(error.to_string())))
			}
		}
	}

	fn settle(&self, cycle: u64, result: Result<(), TransportError>) -> SubmitOutcome {
		let mut state = self.lock();

		// Only the submission that entered Submitting may leave it
		if state.cycle != cycle || state.status != SubmissionStatus::Submitting {
			return SubmitOutcome::Ignored;
		}

		let outcome = match result {
			Ok(()) => {
				let updates = state.form.reset();
				self.surface.clear_values();
				self.reflect(&updates);
				state.status = SubmissionStatus::Succeeded;
				self.surface.show_status(Some(&StatusMessage::success()));
				tracing::info!(cycle, "contact form submitted");
				SubmitOutcome::Succeeded
			}
			Err(error) => {
				state.status = SubmissionStatus::Failed;
				self.surface.show_status(Some(&StatusMessage::failure()));
				tracing::warn!(cycle, %error, "contact form submission failed");
				SubmitOutcome::Failed(error)
			}
		};
		self.surface.set_busy(false);

		state.revert = Some(self.schedule_revert(cycle));
		outcome
	}

	fn schedule_revert(&self, cycle: u64) -> TimerHandle {
		let state = Arc::clone(&self.state);
		let surface = Arc::clone(&self.surface);

		timer::schedule(self.display_timeout, move || {
			let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
			if state.cycle != cycle || !state.status.is_settled() {
				return;
			}
			state.status = SubmissionStatus::Idle;
			state.revert = None;
			surface.show_status(None);
			tracing::debug!(cycle, "status message cleared");
		})
	}
}

impl std::fmt::Debug for SubmissionWorkflow {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.lock();
		f.debug_struct("SubmissionWorkflow")
			.field("status", &state.status)
			.field("cycle", &state.cycle)
			.field("display_timeout", &self.display_timeout)
			.finish()
	}
}
