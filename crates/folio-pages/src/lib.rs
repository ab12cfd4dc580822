//! Folio Pages - interaction state for the portfolio page
//!
//! The contact form submission workflow and the peripheral page behaviour,
//! kept free of any DOM so they can be driven by whatever renders the page.
//!
//! ## Architecture
//!
//! - [`workflow`]: Submission state machine (idle, submitting, settled) over a [`folio_forms::Form`]
//! - [`transport`]: Where submissions go; a simulated transport is provided
//! - [`surface`]: How the workflow writes back to the page
//! - [`timer`]: Cancelable single-fire delays
//! - [`ui`]: Navbar, menu, theme, reveal, progress, counters, typing, lazy images
//! - [`page`]: All reflectors behind one scroll handler
//! - [`settings`]: Defaults, TOML and `FOLIO_` environment overrides
//!
//! ## Example
//!
//! ```
//! use folio_forms::Form;
//! use folio_pages::{RecordingSurface, SimulatedTransport, SubmissionWorkflow, SubmitOutcome};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let surface = Arc::new(RecordingSurface::new());
//! let transport = Arc::new(SimulatedTransport::new(Duration::from_millis(1)));
//! let workflow = SubmissionWorkflow::new(Form::contact(), transport, surface.clone());
//!
//! workflow.input("name", "Ada").unwrap();
//! workflow.input("email", "ada@example.com").unwrap();
//! workflow.input("message", "Loved the portfolio!").unwrap();
//!
//! assert!(matches!(workflow.submit().await, SubmitOutcome::Succeeded));
//! # }
//! ```

pub mod page;
pub mod settings;
pub mod surface;
pub mod timer;
pub mod transport;
pub mod ui;
pub mod workflow;

pub use page::{PageLayout, PortfolioPage, ScrollEffects, ScrollSnapshot};
pub use settings::{PageSettings, SettingsError, SettingsResult};
pub use surface::{FormSurface, RecordingSurface, StatusMessage, StatusTone, SurfaceEvent};
pub use timer::TimerHandle;
pub use transport::{SimulatedTransport, Submission, Transport, TransportError};
pub use workflow::{SubmissionStatus, SubmissionWorkflow, SubmitOutcome};
