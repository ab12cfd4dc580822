//! Form field declarations and the per-field validator

use crate::validators::{self, EmailValidator, LengthValidator};
use serde::{Deserialize, Serialize};

/// Declared kind of a form field.
///
/// The kind decides which kind-specific rule runs after the required check
/// and whether the field accepts multi-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
	/// Single-line free text
	Text,
	/// Single-line email address
	Email,
	/// Multi-line free text (rendered as a textarea)
	LongText,
}

impl FieldKind {
	/// Whether the field accepts line breaks.
	///
	/// Enter inside a multi-line field inserts a newline instead of
	/// submitting the form.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::FieldKind;
	///
	/// assert!(FieldKind::LongText.is_multiline());
	/// assert!(!FieldKind::Email.is_multiline());
	/// ```
	pub fn is_multiline(&self) -> bool {
		matches!(self, FieldKind::LongText)
	}
}

/// Validation state of a single field as last evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum FieldState {
	/// Never validated since creation or the last reset
	#[default]
	Untouched,
	/// Passed every rule on the last evaluation
	Valid,
	/// Failed a rule; carries the message of the first failing rule
	Invalid(String),
}

impl FieldState {
	pub fn is_invalid(&self) -> bool {
		matches!(self, FieldState::Invalid(_))
	}

	pub fn is_valid(&self) -> bool {
		matches!(self, FieldState::Valid)
	}

	/// Error message to display next to the field, if any
	pub fn message(&self) -> Option<&str> {
		match self {
			FieldState::Invalid(message) => Some(message),
			_ => None,
		}
	}
}

/// A failed validation rule.
///
/// The `Display` output is the user-facing message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("This field is required")]
	Required,
	#[error("Please enter a valid email address")]
	InvalidEmail,
	#[error("{label} must be at least {min} characters")]
	TooShort { label: String, min: usize },
	#[error("{label} must be at most {max} characters")]
	TooLong { label: String, max: usize },
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Outcome of validating one field: valid, or invalid with a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
	pub ok: bool,
	pub message: Option<String>,
}

impl Verdict {
	pub fn valid() -> Self {
		Self {
			ok: true,
			message: None,
		}
	}

	pub fn invalid(message: impl Into<String>) -> Self {
		Self {
			ok: false,
			message: Some(message.into()),
		}
	}

	/// Convert the verdict into the state stored on the field
	pub fn to_state(&self) -> FieldState {
		match (&self.ok, &self.message) {
			(true, _) => FieldState::Valid,
			(false, Some(message)) => FieldState::Invalid(message.clone()),
			(false, None) => FieldState::Invalid(String::new()),
		}
	}
}

impl From<FieldResult<()>> for Verdict {
	fn from(result: FieldResult<()>) -> Self {
		match result {
			Ok(()) => Verdict::valid(),
			Err(error) => Verdict::invalid(error.to_string()),
		}
	}
}

/// One named input of the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	pub name: String,
	pub label: Option<String>,
	pub kind: FieldKind,
	pub value: String,
	pub state: FieldState,
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
}

impl Field {
	/// Create a new, empty and untouched field
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::{Field, FieldKind, FieldState};
	///
	/// let field = Field::new("email", FieldKind::Email);
	/// assert_eq!(field.name, "email");
	/// assert_eq!(field.value, "");
	/// assert_eq!(field.state, FieldState::Untouched);
	/// ```
	pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			label: None,
			kind,
			value: String::new(),
			state: FieldState::Untouched,
			min_length: None,
			max_length: None,
		}
	}

	/// Set the human-readable label used in length messages
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::{Field, FieldKind};
	///
	/// let field = Field::new("name", FieldKind::Text).with_label("Name");
	/// assert_eq!(field.label(), "Name");
	/// ```
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the minimum trimmed length
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Set the maximum trimmed length
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Label used in messages; falls back to the field name
	pub fn label(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.name)
	}

	/// Run the rules in order and return the trimmed value.
	///
	/// Order is required, then the kind-specific rule (email only), then
	/// length. The first failure wins, so an empty name reports
	/// "required" and never a length error.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::{Field, FieldError, FieldKind};
	///
	/// let field = Field::new("email", FieldKind::Email).with_value(" a@b.c ");
	/// assert_eq!(field.clean(), Ok("a@b.c"));
	///
	/// let field = Field::new("email", FieldKind::Email).with_value("a@b");
	/// assert_eq!(field.clean(), Err(FieldError::InvalidEmail));
	/// ```
	pub fn clean(&self) -> FieldResult<&str> {
		let value = validators::required(&self.value)?;

		if self.kind == FieldKind::Email {
			EmailValidator::new().validate(value)?;
		}

		LengthValidator::new(self.label())
			.with_bounds(self.min_length, self.max_length)
			.validate(value)?;

		Ok(value)
	}

	/// Validate the current value without touching the stored state
	pub fn validate(&self) -> Verdict {
		self.clean().map(|_| ()).into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldKind::Text)]
	#[case(FieldKind::Email)]
	#[case(FieldKind::LongText)]
	fn test_empty_value_is_required_for_every_kind(#[case] kind: FieldKind) {
		// Arrange
		let field = Field::new("any", kind).with_value("   ");

		// Act
		let verdict = field.validate();

		// Assert
		assert!(!verdict.ok);
		assert_eq!(verdict.message.as_deref(), Some("This field is required"));
	}

	#[rstest]
	fn test_required_wins_over_length() {
		// Arrange
		let field = Field::new("name", FieldKind::Text)
			.with_label("Name")
			.with_min_length(2);

		// Act & Assert
		assert_eq!(field.clean(), Err(FieldError::Required));
	}

	#[rstest]
	fn test_email_rule_runs_before_length() {
		// Arrange
		let field = Field::new("email", FieldKind::Email)
			.with_min_length(10)
			.with_value("bad");

		// Act & Assert
		assert_eq!(field.clean(), Err(FieldError::InvalidEmail));
	}

	#[rstest]
	fn test_length_message_uses_label() {
		// Arrange
		let field = Field::new("message", FieldKind::LongText)
			.with_label("Message")
			.with_min_length(10)
			.with_value("short");

		// Act
		let verdict = field.validate();

		// Assert
		assert_eq!(
			verdict.message.as_deref(),
			Some("Message must be at least 10 characters")
		);
	}

	#[rstest]
	fn test_label_falls_back_to_name() {
		let field = Field::new("nickname", FieldKind::Text).with_min_length(3);
		assert_eq!(field.label(), "nickname");
		assert_eq!(
			field.with_value("ab").validate().message.as_deref(),
			Some("nickname must be at least 3 characters")
		);
	}

	#[rstest]
	fn test_text_without_extra_rules_is_valid_when_present() {
		let field = Field::new("subject", FieldKind::Text).with_value("x");
		assert_eq!(field.validate(), Verdict::valid());
	}

	#[rstest]
	fn test_validate_does_not_mutate_state() {
		let field = Field::new("name", FieldKind::Text).with_value("");
		let _ = field.validate();
		assert_eq!(field.state, FieldState::Untouched);
	}

	#[rstest]
	#[case(Verdict::valid(), FieldState::Valid)]
	#[case(Verdict::invalid("nope"), FieldState::Invalid("nope".to_string()))]
	fn test_verdict_to_state(#[case] verdict: Verdict, #[case] expected: FieldState) {
		assert_eq!(verdict.to_state(), expected);
	}

	#[rstest]
	fn test_field_state_serializes_with_message() {
		// Arrange
		let state = FieldState::Invalid("This field is required".to_string());

		// Act
		let json = serde_json::to_value(&state).unwrap();

		// Assert
		assert_eq!(
			json,
			serde_json::json!({"state": "invalid", "message": "This field is required"})
		);
	}

	#[rstest]
	#[case(FieldKind::Text, "text")]
	#[case(FieldKind::Email, "email")]
	#[case(FieldKind::LongText, "longtext")]
	fn test_field_kind_names(#[case] kind: FieldKind, #[case] name: &str) {
		// Act
		let json = serde_json::to_value(kind).unwrap();
		let parsed: FieldKind = serde_json::from_value(serde_json::json!(name)).unwrap();

		// Assert
		assert_eq!(json, serde_json::json!(name));
		assert_eq!(parsed, kind);
	}
}
