//! Field validation for the input form.
//!
//! Each field is described by a [`Validatable`] carrying its value and the
//! checks that apply. Every failing check is reported, not just the first.

use super::config::FormRules;
use thiserror::Error;

/// Value of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Text entry; length checks apply.
    Text(&'a str),
    /// Numeric entry; `None` when the raw input is not an integer.
    Number(Option<i64>),
}

/// A field value and the checks that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validatable<'a> {
    /// Field name used in error reports.
    pub field: &'static str,
    /// Field value.
    pub value: FieldValue<'a>,
    /// Value must be present: non-blank text or a non-zero number.
    pub required: bool,
    /// Text must be strictly longer than this.
    pub min_length: Option<usize>,
    /// Text must be strictly shorter than this.
    pub max_length: Option<usize>,
    /// Number must be at least this.
    pub min: Option<i64>,
    /// Number must be at most this.
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    /// Describes a text field with no checks.
    #[must_use]
    pub const fn text(field: &'static str, value: &'a str) -> Self {
        Self::with_value(field, FieldValue::Text(value))
    }

    /// Describes a numeric field with no checks.
    #[must_use]
    pub const fn number(field: &'static str, value: Option<i64>) -> Self {
        Self::with_value(field, FieldValue::Number(value))
    }

    const fn with_value(field: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            field,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires a value.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the exclusive lower length bound.
    #[must_use]
    pub const fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Sets the exclusive upper length bound.
    #[must_use]
    pub const fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Sets the inclusive numeric range.
    #[must_use]
    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// A failed field check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The field is blank, zero or not a number.
    #[error("{0} is required")]
    Missing(&'static str),

    /// The text is not longer than the minimum.
    #[error("{field} needs more than {min} characters")]
    TooShort {
        /// Field name.
        field: &'static str,
        /// Exclusive lower bound.
        min: usize,
    },

    /// The text is not shorter than the maximum.
    #[error("{field} needs fewer than {max} characters")]
    TooLong {
        /// Field name.
        field: &'static str,
        /// Exclusive upper bound.
        max: usize,
    },

    /// The number is outside the accepted range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

/// Checks a single field.
///
/// Text lengths are counted in characters on the trimmed value.
///
/// # Errors
///
/// Returns every failing check for the field.
pub fn validate(input: &Validatable<'_>) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    match input.value {
        FieldValue::Text(raw) => {
            let text = raw.trim();
            if input.required && text.is_empty() {
                errors.push(FieldError::Missing(input.field));
            }
            let length = text.chars().count();
            if let Some(min) = input.min_length.filter(|min| length <= *min) {
                errors.push(FieldError::TooShort {
                    field: input.field,
                    min,
                });
            }
            if let Some(max) = input.max_length.filter(|max| length >= *max) {
                errors.push(FieldError::TooLong {
                    field: input.field,
                    max,
                });
            }
        }
        FieldValue::Number(value) => {
            let number = value.unwrap_or_default();
            if input.required && number == 0 {
                errors.push(FieldError::Missing(input.field));
            }
            let below = input.min.is_some_and(|min| number < min);
            let above = input.max.is_some_and(|max| number > max);
            if value.is_some() && (below || above) {
                errors.push(FieldError::OutOfRange {
                    field: input.field,
                    min: input.min.unwrap_or(i64::MIN),
                    max: input.max.unwrap_or(i64::MAX),
                });
            }
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Raw values typed into the input form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Title field.
    pub title: String,
    /// Description field.
    pub description: String,
    /// People field.
    pub people: String,
}

/// Field values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    /// Trimmed title.
    pub title: String,
    /// Trimmed description.
    pub description: String,
    /// People count.
    pub people: u32,
}

/// Checks every form field against `rules`.
///
/// # Errors
///
/// Returns every failing check across all fields.
pub fn validate_form(fields: &FormFields, rules: &FormRules) -> Result<ValidInput, Vec<FieldError>> {
    let people = fields.people.trim().parse::<i64>().ok();
    let checks = [
        Validatable::text("title", &fields.title)
            .required()
            .min_length(rules.title_min_length),
        Validatable::text("description", &fields.description)
            .required()
            .min_length(rules.description_min_length)
            .max_length(rules.description_max_length),
        Validatable::number("people", people)
            .required()
            .range(rules.people_min, rules.people_max),
    ];
    let errors: Vec<FieldError> = checks
        .iter()
        .filter_map(|check| validate(check).err())
        .flatten()
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }
    let people_count = people
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| vec![FieldError::Missing("people")])?;
    Ok(ValidInput {
        title: fields.title.trim().to_owned(),
        description: fields.description.trim().to_owned(),
        people: people_count,
    })
}
