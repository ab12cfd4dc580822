//! Submission workflow tests
//!
//! Runs the workflow on a paused tokio clock so latency and the status
//! display timeout are deterministic.

use folio_forms::Form;
use folio_pages::surface::{RecordingSurface, StatusMessage, StatusTone, SurfaceEvent};
use folio_pages::transport::{SimulatedTransport, TransportError};
use folio_pages::workflow::{SubmissionStatus, SubmissionWorkflow, SubmitOutcome};
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

struct Harness {
	workflow: SubmissionWorkflow,
	transport: Arc<SimulatedTransport>,
	surface: Arc<RecordingSurface>,
}

fn harness(transport: SimulatedTransport) -> Harness {
	let transport = Arc::new(transport);
	let surface = Arc::new(RecordingSurface::new());
	let workflow = SubmissionWorkflow::new(Form::contact(), transport.clone(), surface.clone());
	Harness {
		workflow,
		transport,
		surface,
	}
}

fn fill(workflow: &SubmissionWorkflow, name: &str, email: &str, message: &str) {
	workflow.input("name", name).unwrap();
	workflow.input("email", email).unwrap();
	workflow.input("message", message).unwrap();
}

/// Let spawned tasks run up to their next suspension point
async fn yield_now() {
	for _ in 0..4 {
		tokio::task::yield_now().await;
	}
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_successful_submission_end_to_end() {
	// Arrange
	let h = harness(SimulatedTransport::default());
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");

	// Act
	let outcome = h.workflow.submit().await;

	// Assert
	assert_eq!(outcome, SubmitOutcome::Succeeded);
	assert_eq!(h.workflow.status(), SubmissionStatus::Succeeded);
	assert_eq!(h.workflow.value("name").as_deref(), Some(""));
	assert_eq!(h.workflow.value("message").as_deref(), Some(""));
	assert!(!h.surface.is_busy());
	assert_eq!(h.surface.status(), Some(StatusMessage::success()));
	assert!(h.surface.events().contains(&SurfaceEvent::ValuesCleared));

	let sent = h.transport.submissions();
	assert_eq!(sent.len(), 1);
	assert_eq!(sent[0].get("name"), Some("Al"));
	assert_eq!(sent[0].get("email"), Some("al@x.com"));
	assert_eq!(sent[0].get("message"), Some("Hello there!"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_invalid_submission_surfaces_three_messages() {
	// Arrange
	let h = harness(SimulatedTransport::default());
	fill(&h.workflow, "A", "bad", "short");

	// Act
	let outcome = h.workflow.submit().await;

	// Assert
	let SubmitOutcome::Rejected(report) = outcome else {
		panic!("expected rejection, got {outcome:?}");
	};
	assert!(!report.all_valid);
	assert_eq!(
		h.surface.field_message("name").as_deref(),
		Some("Name must be at least 2 characters")
	);
	assert_eq!(
		h.surface.field_message("email").as_deref(),
		Some("Please enter a valid email address")
	);
	assert_eq!(
		h.surface.field_message("message").as_deref(),
		Some("Message must be at least 10 characters")
	);
	assert_eq!(h.workflow.status(), SubmissionStatus::Idle);
	assert!(h.transport.submissions().is_empty());
	assert!(
		!h.surface
			.events()
			.iter()
			.any(|e| matches!(e, SurfaceEvent::Busy(_)))
	);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_failure_keeps_input_and_shows_error() {
	// Arrange
	let h = harness(SimulatedTransport::failing(
		Duration::from_secs(2),
		TransportError::Unavailable("offline".to_string()),
	));
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");

	// Act
	let outcome = h.workflow.submit().await;

	// Assert
	assert_eq!(
		outcome,
		SubmitOutcome::Failed(TransportError::Unavailable("offline".to_string()))
	);
	assert_eq!(h.workflow.status(), SubmissionStatus::Failed);
	assert_eq!(h.workflow.value("name").as_deref(), Some("Al"));
	assert_eq!(h.workflow.value("message").as_deref(), Some("Hello there!"));
	assert!(!h.surface.is_busy());
	let status = h.surface.status().unwrap();
	assert_eq!(status.tone, StatusTone::Failure);
	assert!(!h.surface.events().contains(&SurfaceEvent::ValuesCleared));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_resubmit_after_failure_revalidates() {
	// Arrange
	let h = harness(SimulatedTransport::failing(
		Duration::from_millis(10),
		TransportError::Rejected("spam".to_string()),
	));
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");
	h.workflow.submit().await;

	// Act: the user breaks a field before trying again
	h.workflow.input("email", "oops").unwrap();
	let outcome = h.workflow.submit().await;

	// Assert
	assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
	assert_eq!(h.transport.submissions().len(), 1);
	assert_eq!(h.workflow.status(), SubmissionStatus::Failed);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_reentrant_submit_is_ignored() {
	// Arrange
	let h = harness(SimulatedTransport::default());
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");
	let first = {
		let workflow = h.workflow.clone();
		tokio::spawn(async move { workflow.submit().await })
	};
	yield_now().await;
	assert!(h.workflow.is_submitting());
	let busy_events = || {
		h.surface
			.events()
			.iter()
			.filter(|e| matches!(e, SurfaceEvent::Busy(_)))
			.count()
	};
	let busy_before = busy_events();

	// Act
	let second = h.workflow.submit().await;

	// Assert
	assert_eq!(second, SubmitOutcome::Ignored);
	assert!(h.surface.is_busy());
	assert_eq!(busy_events(), busy_before);
	assert_eq!(first.await.unwrap(), SubmitOutcome::Succeeded);
	assert_eq!(h.transport.submissions().len(), 1);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_status_reverts_after_display_timeout() {
	// Arrange
	let h = harness(SimulatedTransport::new(Duration::ZERO));
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");
	h.workflow.submit().await;
	assert_eq!(h.surface.status(), Some(StatusMessage::success()));

	// Act & Assert
	tokio::time::sleep(Duration::from_millis(4990)).await;
	assert_eq!(h.workflow.status(), SubmissionStatus::Succeeded);
	assert!(h.surface.status().is_some());

	tokio::time::sleep(Duration::from_millis(20)).await;
	assert_eq!(h.workflow.status(), SubmissionStatus::Idle);
	assert_eq!(h.surface.status(), None);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_failed_status_also_reverts() {
	let h = harness(SimulatedTransport::failing(
		Duration::ZERO,
		TransportError::Unavailable("offline".to_string()),
	));
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");
	h.workflow.submit().await;

	tokio::time::sleep(Duration::from_millis(5010)).await;

	assert_eq!(h.workflow.status(), SubmissionStatus::Idle);
	assert_eq!(h.surface.status(), None);
	assert_eq!(h.workflow.value("name").as_deref(), Some("Al"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_new_submission_cancels_pending_revert() {
	// Arrange: first submission settles at t=4s, its revert is due at t=9s
	let h = harness(SimulatedTransport::new(Duration::from_secs(4)));
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");
	h.workflow.submit().await;
	let first_settled = tokio::time::Instant::now();
	let first_revert = h.workflow.pending_revert().unwrap();
	assert!(!first_revert.is_finished());

	// Act: second submission at t=7s stays in flight until t=11s
	tokio::time::sleep(Duration::from_secs(3)).await;
	fill(&h.workflow, "Bo", "bo@x.com", "Second message");
	let second = {
		let workflow = h.workflow.clone();
		tokio::spawn(async move { workflow.submit().await })
	};
	yield_now().await;
	yield_now().await;

	// Assert: the old timer is aborted at t=7s, well before its t=9s deadline
	assert!(first_revert.is_finished());
	assert!(h.workflow.pending_revert().is_none());
	assert!(tokio::time::Instant::now() < first_settled + Duration::from_secs(5));

	// The old revert would have fired at t=9s
	tokio::time::sleep_until(first_settled + Duration::from_secs(6)).await;
	assert_eq!(h.workflow.status(), SubmissionStatus::Submitting);
	assert!(h.surface.is_busy());

	assert_eq!(second.await.unwrap(), SubmitOutcome::Succeeded);
	assert_eq!(h.surface.status(), Some(StatusMessage::success()));

	// The new message gets its own full display timeout
	tokio::time::sleep(Duration::from_secs(4)).await;
	assert_eq!(h.workflow.status(), SubmissionStatus::Succeeded);
	tokio::time::sleep(Duration::from_millis(1010)).await;
	assert_eq!(h.workflow.status(), SubmissionStatus::Idle);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_revalidating_valid_form_does_not_toggle_decoration() {
	// Arrange
	let h = harness(SimulatedTransport::default());
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");
	for field in ["name", "email", "message"] {
		h.workflow.blur(field).unwrap();
	}
	h.surface.take_events();

	// Act
	for field in ["name", "email", "message"] {
		h.workflow.blur(field).unwrap();
	}

	// Assert
	assert!(h.workflow.is_valid());
	assert!(h.surface.events().is_empty());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_dropped_submit_future_still_settles() {
	// Arrange
	let h = harness(SimulatedTransport::default());
	fill(&h.workflow, "Al", "al@x.com", "Hello there!");

	// Act: abandon the caller while the transport is in flight
	let _ = tokio::time::timeout(Duration::from_millis(100), h.workflow.submit()).await;
	assert!(h.workflow.is_submitting());
	tokio::time::sleep(Duration::from_secs(3)).await;

	// Assert
	assert_eq!(h.workflow.status(), SubmissionStatus::Succeeded);
	assert!(!h.surface.is_busy());
}
