//! Submission transport
//!
//! The workflow hands a validated [`Submission`] to a [`Transport`] exactly
//! once per attempt. Delivering it anywhere real is up to the implementor;
//! [`SimulatedTransport`] reproduces the page's fake round trip.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Validated, trimmed field values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission {
	fields: HashMap<String, String>,
}

impl Submission {
	pub fn new(fields: HashMap<String, String>) -> Self {
		Self { fields }
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.fields.get(name).map(String::as_str)
	}

	pub fn fields(&self) -> &HashMap<String, String> {
		&self.fields
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
	/// The receiving end refused the submission
	#[error("Submission rejected: {0}")]
	Rejected(String),
	/// The submission could not be delivered
	#[error("Transport unavailable: {0}")]
	Unavailable(String),
}

/// Delivers a submission; resolves once it has succeeded or failed
#[async_trait]
pub trait Transport: Send + Sync {
	async fn submit(&self, submission: &Submission) -> Result<(), TransportError>;
}

/// Waits a fixed latency, records the submission and returns a fixed outcome.
///
/// # Examples
///
/// ```
/// use folio_pages::transport::{SimulatedTransport, Submission, Transport};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let transport = SimulatedTransport::new(Duration::ZERO);
/// assert!(transport.submit(&Submission::default()).await.is_ok());
/// assert_eq!(transport.submissions().len(), 1);
/// # }
/// ```
#[derive(Debug)]
pub struct SimulatedTransport {
	latency: Duration,
	outcome: Result<(), TransportError>,
	submissions: Mutex<Vec<Submission>>,
}

impl SimulatedTransport {
	/// Always succeeds after `latency`
	pub fn new(latency: Duration) -> Self {
		Self {
			latency,
			outcome: Ok(()),
			submissions: Mutex::new(Vec::new()),
		}
	}

	/// Always fails with `error` after `latency`
	pub fn failing(latency: Duration, error: TransportError) -> Self {
		Self {
			outcome: Err(error),
			..Self::new(latency)
		}
	}

	/// Every submission received so far, oldest first
	pub fn submissions(&self) -> Vec<Submission> {
		self.submissions
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}
}

impl Default for SimulatedTransport {
	fn default() -> Self {
		Self::new(Duration::from_secs(2))
	}
}

#[async_trait]
impl Transport for SimulatedTransport {
	async fn submit(&self, submission: &Submission) -> Result<(), TransportError> {
		self.submissions
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.push(submission.clone());

		tokio::time::sleep(self.latency).await;

		tracing::debug!(
			latency_ms = self.latency.as_millis() as u64,
			ok = self.outcome.is_ok(),
			"simulated transport resolved"
		);
		self.outcome.clone()
	}
}
