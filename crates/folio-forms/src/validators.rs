//! Validation rules for contact form fields
//!
//! Each rule works on a value that has already been trimmed by
//! [`required`], so leading and trailing whitespace never counts toward
//! emptiness or length.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// local@domain.tld: one or more non-whitespace, non-@ characters on each
// side of the @, and a literal dot followed by at least one more.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Whitespace stripped by [`trim`]: Unicode whitespace except NEL, plus
/// the zero-width no-break space (U+FEFF) that browsers also strip.
fn is_trimmable(c: char) -> bool {
	(c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strip leading and trailing whitespace the way a browser form does.
///
/// # Examples
///
/// ```
/// use folio_forms::validators::trim;
///
/// assert_eq!(trim("\u{FEFF} hi \n"), "hi");
/// ```
pub fn trim(value: &str) -> &str {
	value.trim_matches(is_trimmable)
}

/// Length as a browser reports it, in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count
/// twice.
///
/// # Examples
///
/// ```
/// use folio_forms::validators::length;
///
/// assert_eq!(length("héllo"), 5);
/// assert_eq!(length("👍"), 2);
/// ```
pub fn length(value: &str) -> usize {
	value.encode_utf16().count()
}

/// Trim the value and reject it if nothing is left.
///
/// # Examples
///
/// ```
/// use folio_forms::validators::required;
/// use folio_forms::FieldError;
///
/// assert_eq!(required("  hi "), Ok("hi"));
/// assert_eq!(required(" \t\n"), Err(FieldError::Required));
/// ```
pub fn required(value: &str) -> FieldResult<&str> {
	let trimmed = trim(value);
	if trimmed.is_empty() {
		Err(FieldError::Required)
	} else {
		Ok(trimmed)
	}
}

/// Validates that a trimmed value looks like `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use folio_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("a@b.c").is_ok());
/// assert!(validator.validate("a@b").is_err());
/// assert!(validator.validate("abc").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::InvalidEmail)
		}
	}
}

/// Validates the [`length`] of a trimmed value.
#[derive(Debug, Clone)]
pub struct LengthValidator {
	label: String,
	min: Option<usize>,
	max: Option<usize>,
}

impl LengthValidator {
	/// Create a validator with no bounds; `label` names the field in messages
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			min: None,
			max: None,
		}
	}

	pub fn with_min(mut self, min: usize) -> Self {
		self.min = Some(min);
		self
	}

	pub fn with_max(mut self, max: usize) -> Self {
		self.max = Some(max);
		self
	}

	pub fn with_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
		self.min = min;
		self.max = max;
		self
	}

	/// Check the minimum first, then the maximum.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::validators::LengthValidator;
	///
	/// let validator = LengthValidator::new("Name").with_min(2).with_max(4);
	/// assert!(validator.validate("Al").is_ok());
	/// assert_eq!(
	///     validator.validate("A").unwrap_err().to_string(),
	///     "Name must be at least 2 characters"
	/// );
	/// assert!(validator.validate("Alice").is_err());
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let char_count = length(value);

		if let Some(min) = self.min
			&& char_count < min
		{
			return Err(FieldError::TooShort {
				label: self.label.clone(),
				min,
			});
		}

		if let Some(max) = self.max
			&& char_count > max
		{
			return Err(FieldError::TooLong {
				label: self.label.clone(),
				max,
			});
		}

		Ok(())
	}
}
