//! Contact form fields and validation
//!
//! This module provides access to folio-forms: field declarations, the
//! required/email/length rules and the form orchestrator.
//!
//! ## Example
//!
//! ```
//! use folio::forms::{FieldKind, Form, Field};
//!
//! let mut form = Form::new().with_field(Field::new("email", FieldKind::Email));
//! form.input("email", "ada@example.com").unwrap();
//! assert!(form.validate_all().all_valid);
//! ```

// Re-export all folio-forms functionality
pub use folio_forms::*;
