//! Contact form validation for Folio
//!
//! This crate holds the synchronous half of the contact form:
//! - Field declarations with a kind, a label and optional length bounds
//! - Pure validation rules (required, email shape, length)
//! - The form orchestrator that runs the rules on blur, input and submit
//!   and reports per-field state changes for a rendering surface
//!
//! Nothing here touches a DOM or a clock; the submission workflow in
//! `folio-pages` drives this crate and reflects its output.
//!
//! ## Example
//!
//! ```
//! use folio_forms::Form;
//!
//! let mut form = Form::contact();
//! form.input("name", "Al").unwrap();
//! form.input("email", "al@x.com").unwrap();
//! form.input("message", "Hello there!").unwrap();
//!
//! let report = form.validate_all();
//! assert!(report.all_valid);
//! ```

pub mod field;
pub mod form;
pub mod validators;

pub use field::{Field, FieldError, FieldKind, FieldResult, FieldState, Verdict};
pub use form::{ContactLimits, FieldUpdate, Form, FormError, FormResult, ValidationReport};
pub use validators::{EmailValidator, LengthValidator};
