//! Form field descriptors and the error-collecting validator shared by the
//! crisis case and volunteer submissions.
//!
//! Every field is described by a `const` descriptor. The same descriptors
//! drive validation and the form description served to clients, so the
//! bounds a client sees are exactly the bounds enforced here.

use std::collections::HashMap;
use std::fmt;
use std::num::IntErrorKind;

use serde::Serialize;
use validator::ValidateLength;

/// A submitted form body: field name to raw string value.
pub type RawForm = HashMap<String, String>;

/// Separator used when the aggregated messages are rendered as one string.
pub const MESSAGE_SEPARATOR: &str = "; ";

// ---------------------------------------------------------------------------
// Field descriptors
// ---------------------------------------------------------------------------

/// Free text, trimmed, with character-count bounds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TextField {
    pub name: &'static str,
    pub label: &'static str,
    pub min_chars: u64,
    pub max_chars: u64,
}

/// A small integer scale such as severity 1-5.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LevelField {
    pub name: &'static str,
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
}

/// A non-negative quantity with an upper cap.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountField {
    pub name: &'static str,
    pub label: &'static str,
    pub max: i64,
}

/// A value that must exactly match one of a closed set of options.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChoiceField {
    pub name: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
}

/// Any field descriptor, tagged by kind for the form description.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
    Text(TextField),
    Level(LevelField),
    Count(CountField),
    Choice(ChoiceField),
}

// ---------------------------------------------------------------------------
// Aggregated errors
// ---------------------------------------------------------------------------

/// Every message produced while validating one submission.
///
/// Displays as the messages joined by [`MESSAGE_SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn push(&mut self, message: String) {
        self.0.push(message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(MESSAGE_SEPARATOR))
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Checks fields of one form, collecting one message per violated field.
///
/// Checks never short-circuit: callers run every field, then inspect
/// [`FormValidator::into_errors`]. A field accessor returns `None` when the
/// field produced an error.
pub struct FormValidator<'a> {
    form: &'a RawForm,
    errors: ValidationErrors,
}

impl<'a> FormValidator<'a> {
    pub fn new(form: &'a RawForm) -> Self {
        Self {
            form,
            errors: ValidationErrors::default(),
        }
    }

    /// Trimmed text within the field's character bounds.
    pub fn text(&mut self, field: &TextField) -> Option<String> {
        let value = self.trimmed(field.name);

        if value.is_empty() {
            self.reject(format!("{} is required", field.label))
        } else if !value.validate_length(Some(field.min_chars), None, None) {
            self.reject(format!(
                "{} must be at least {} characters",
                field.label, field.min_chars
            ))
        } else if !value.validate_length(None, Some(field.max_chars), None) {
            self.reject(format!(
                "{} must not exceed {} characters",
                field.label, field.max_chars
            ))
        } else {
            Some(value)
        }
    }

    /// Integer within `[min, max]`.
    pub fn level(&mut self, field: &LevelField) -> Option<i64> {
        let value = self.integer(field.name, field.label)?;

        if value < field.min || value > field.max {
            self.reject(format!(
                "{} must be between {} and {}",
                field.label, field.min, field.max
            ))
        } else {
            Some(value)
        }
    }

    /// Integer within `[0, max]`.
    pub fn count(&mut self, field: &CountField) -> Option<i64> {
        let value = self.integer(field.name, field.label)?;

        if value < 0 {
            self.reject(format!("{} cannot be negative", field.label))
        } else if value > field.max {
            self.reject(format!("{} exceeds maximum value", field.label))
        } else {
            Some(value)
        }
    }

    /// One of the field's options, matched exactly after trimming.
    pub fn choice(&mut self, field: &ChoiceField) -> Option<&'static str> {
        let value = self.trimmed(field.name);

        if value.is_empty() {
            return self.reject(format!("{} is required", field.label));
        }

        match field.options.iter().find(|option| **option == value) {
            Some(option) => Some(*option),
            None => self.reject(format!(
                "{} must be one of: {}",
                field.label,
                field.options.join(", ")
            )),
        }
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn trimmed(&self, name: &str) -> String {
        self.form
            .get(name)
            .map(|raw| raw.trim().to_string())
            .unwrap_or_default()
    }

    /// Parse an integer field. A missing field reads as `0`; a present but
    /// unparseable one is a type error and yields `None`.
    ///
    /// Well-formed integers outside `i64` saturate, so the caller's range
    /// check reports them.
    fn integer(&mut self, name: &str, label: &str) -> Option<i64> {
        let Some(raw) = self.form.get(name) else {
            return Some(0);
        };

        match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => self.reject(format!("{label} must be a valid number")),
            },
        }
    }

    fn reject<T>(&mut self, message: String) -> Option<T> {
        self.errors.push(message);
        None
    }
}
