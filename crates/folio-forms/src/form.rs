use crate::field::{Field, FieldKind, FieldState, Verdict};
use crate::validators;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	/// The rendering layer referenced a field this form never declared
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Upper bounds applied to the contact form fields.
///
/// The minimums (name 2, message 10) are fixed by the form itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLimits {
	pub name_max: usize,
	pub email_max: usize,
	pub message_max: usize,
}

impl Default for ContactLimits {
	fn default() -> Self {
		Self {
			name_max: 100,
			// RFC 5321 path limit
			email_max: 254,
			message_max: 5000,
		}
	}
}

/// State transition of one field produced by a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
	pub name: String,
	pub previous: FieldState,
	pub current: FieldState,
}

impl FieldUpdate {
	/// Whether the decoration shown for this field has to change
	pub fn changed(&self) -> bool {
		self.previous != self.current
	}
}

/// Result of a full-form validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
	pub all_valid: bool,
	/// Verdicts in field declaration order
	pub per_field: Vec<(String, Verdict)>,
	/// State transitions, one per field, in declaration order
	pub updates: Vec<FieldUpdate>,
}

impl ValidationReport {
	pub fn verdict(&self, name: &str) -> Option<&Verdict> {
		self.per_field
			.iter()
			.find(|(field, _)| field == name)
			.map(|(_, verdict)| verdict)
	}

	/// Messages of the failing fields, in declaration order
	pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
		self.per_field.iter().filter_map(|(name, verdict)| {
			verdict
				.message
				.as_deref()
				.filter(|_| !verdict.ok)
				.map(|message| (name.as_str(), message))
		})
	}
}

/// Ordered collection of fields plus the validation triggers.
///
/// The form never renders anything. Every trigger returns the
/// [`FieldUpdate`]s it caused so the caller can reflect them.
#[derive(Debug, Clone, Default)]
pub struct Form {
	fields: Vec<Field>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::Form;
	///
	/// let form = Form::new();
	/// assert_eq!(form.field_count(), 0);
	/// ```
	pub fn new() -> Self {
		Self { fields: vec![] }
	}

	/// The portfolio contact form with default limits
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::{FieldKind, Form};
	///
	/// let form = Form::contact();
	/// let names: Vec<_> = form.fields().iter().map(|f| f.name.as_str()).collect();
	/// assert_eq!(names, ["name", "email", "message"]);
	/// assert_eq!(form.get_field("message").unwrap().kind, FieldKind::LongText);
	/// ```
	pub fn contact() -> Self {
		Self::contact_with_limits(ContactLimits::default())
	}

	pub fn contact_with_limits(limits: ContactLimits) -> Self {
		Self::new()
			.with_field(
				Field::new("name", FieldKind::Text)
					.with_label("Name")
					.with_min_length(2)
					.with_max_length(limits.name_max),
			)
			.with_field(
				Field::new("email", FieldKind::Email)
					.with_label("Email")
					.with_max_length(limits.email_max),
			)
			.with_field(
				Field::new("message", FieldKind::LongText)
					.with_label("Message")
					.with_min_length(10)
					.with_max_length(limits.message_max),
			)
	}

	pub fn add_field(&mut self, field: Field) {
		self.fields.push(field);
	}

	pub fn with_field(mut self, field: Field) -> Self {
		self.add_field(field);
		self
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	pub fn get_field(&self, name: &str) -> Option<&Field> {
		self.fields.iter().find(|f| f.name == name)
	}

	fn field_mut(&mut self, name: &str) -> FormResult<&mut Field> {
		self.fields
			.iter_mut()
			.find(|f| f.name == name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))
	}

	/// Replace a field's value without validating it
	pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
		self.field_mut(name)?.value = value.into();
		Ok(())
	}

	/// Handle an input event.
	///
	/// The value is always stored. The field is only re-validated when it
	/// is currently showing an error, so a first draft is not nagged while
	/// it is being typed.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::Form;
	///
	/// let mut form = Form::contact();
	/// assert!(form.input("name", "A").unwrap().is_none());
	///
	/// form.blur("name").unwrap();
	/// let update = form.input("name", "Al").unwrap().unwrap();
	/// assert!(update.current.is_valid());
	/// ```
	pub fn input(
		&mut self,
		name: &str,
		value: impl Into<String>,
	) -> FormResult<Option<FieldUpdate>> {
		let field = self.field_mut(name)?;
		field.value = value.into();
		if field.state.is_invalid() {
			Ok(Some(evaluate(field)))
		} else {
			Ok(None)
		}
	}

	/// Handle focus loss: validate this single field
	pub fn blur(&mut self, name: &str) -> FormResult<FieldUpdate> {
		Ok(evaluate(self.field_mut(name)?))
	}

	/// Validate every field unconditionally, in declaration order
	pub fn validate_all(&mut self) -> ValidationReport {
		let mut per_field = Vec::with_capacity(self.fields.len());
		let mut updates = Vec::with_capacity(self.fields.len());

		for field in &mut self.fields {
			let verdict = field.validate();
			updates.push(apply(field, &verdict));
			per_field.push((field.name.clone(), verdict));
		}

		ValidationReport {
			all_valid: per_field.iter().all(|(_, verdict)| verdict.ok),
			per_field,
			updates,
		}
	}

	/// True iff every field is currently in the valid state.
	///
	/// Untouched fields count as not valid; a form without fields is valid,
	/// matching [`ValidationReport::all_valid`].
	pub fn is_valid(&self) -> bool {
		self.fields.iter().all(|f| f.state.is_valid())
	}

	/// Trimmed values keyed by field name
	pub fn values(&self) -> HashMap<String, String> {
		self.fields
			.iter()
			.map(|f| (f.name.clone(), validators::trim(&f.value).to_string()))
			.collect()
	}

	/// Clear every value and return every field to untouched
	pub fn reset(&mut self) -> Vec<FieldUpdate> {
		self.fields
			.iter_mut()
			.map(|field| {
				field.value.clear();
				FieldUpdate {
					name: field.name.clone(),
					previous: std::mem::take(&mut field.state),
					current: FieldState::Untouched,
				}
			})
			.collect()
	}
}

fn evaluate(field: &mut Field) -> FieldUpdate {
	let verdict = field.validate();
	apply(field, &verdict)
}

// Replaces the whole state, so a field that became valid never keeps an
// old message.
fn apply(field: &mut Field, verdict: &Verdict) -> FieldUpdate {
	let previous = std::mem::replace(&mut field.state, verdict.to_state());
	FieldUpdate {
		name: field.name.clone(),
		previous,
		current: field.state.clone(),
	}
}
