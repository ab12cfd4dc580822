//! # Folio
//!
//! Interaction state for a single-page personal portfolio.
//!
//! Folio keeps everything a portfolio page does on the client as plain Rust
//! state machines: the contact form with its validation and simulated
//! submission, and the page effects around it (sticky navbar, mobile menu,
//! theme toggle, scroll reveal, skill bars, stat counters, typing text,
//! lazy images). A rendering layer feeds them scroll and layout numbers and
//! applies what they return.
//!
//! ## Feature Flags
//!
//! - `forms` - Contact form fields and validation ([`forms`])
//! - `pages` - Submission workflow, settings and page reflectors ([`pages`])
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```
//! use folio::forms::Form;
//!
//! let mut form = Form::contact();
//! form.input("email", "not-an-email").unwrap();
//!
//! let report = form.validate_all();
//! assert_eq!(
//!     report.verdict("email").and_then(|v| v.message.as_deref()),
//!     Some("Please enter a valid email address"),
//! );
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "forms")]
pub use folio_forms::{Form, FormError, ValidationReport, Verdict};

#[cfg(feature = "pages")]
pub use folio_pages::{PageSettings, SettingsError, SubmissionStatus, SubmissionWorkflow, SubmitOutcome};
