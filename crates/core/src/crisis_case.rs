//! Crisis case status values, form fields, and submission validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form::{CountField, FieldSpec, FormValidator, LevelField, RawForm, TextField};
use crate::priority::calculate_priority;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a crisis case. New cases start as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    #[default]
    Pending,
    Active,
    Completed,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 3] = [Self::Pending, Self::Active, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "case status",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for CaseStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Form fields
// ---------------------------------------------------------------------------

pub const TITLE: TextField = TextField {
    name: "title",
    label: "Situation title",
    min_chars: 5,
    max_chars: 200,
};

pub const DESCRIPTION: TextField = TextField {
    name: "description",
    label: "Situation assessment",
    min_chars: 20,
    max_chars: 5000,
};

pub const SEVERITY: LevelField = LevelField {
    name: "severity",
    label: "Severity",
    min: 1,
    max: 5,
};

pub const URGENCY: LevelField = LevelField {
    name: "urgency",
    label: "Urgency",
    min: 1,
    max: 5,
};

pub const PEOPLE_AFFECTED: CountField = CountField {
    name: "people_affected",
    label: "Population impact",
    max: 10_000_000,
};

pub const AVAILABLE_RESOURCES: CountField = CountField {
    name: "available_resources",
    label: "Current resources",
    max: 1_000_000,
};

pub const REQUIRED_SKILL: TextField = TextField {
    name: "required_skill",
    label: "Critical expertise",
    min_chars: 3,
    max_chars: 100,
};

/// Fields of the crisis report form, in display order.
pub const CASE_FORM: [FieldSpec; 7] = [
    FieldSpec::Text(TITLE),
    FieldSpec::Text(DESCRIPTION),
    FieldSpec::Level(SEVERITY),
    FieldSpec::Level(URGENCY),
    FieldSpec::Count(PEOPLE_AFFECTED),
    FieldSpec::Count(AVAILABLE_RESOURCES),
    FieldSpec::Text(REQUIRED_SKILL),
];

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A crisis report that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseSubmission {
    pub title: String,
    pub description: String,
    pub severity: i64,
    pub urgency: i64,
    pub people_affected: i64,
    pub available_resources: i64,
    pub required_skill: String,
}

impl CaseSubmission {
    pub fn priority_score(&self) -> i64 {
        calculate_priority(
            self.severity,
            self.people_affected,
            self.urgency,
            self.available_resources,
        )
    }
}

/// Validate a crisis report form.
///
/// Every field is checked; on failure the error lists one message per
/// invalid field.
pub fn validate_case(form: &RawForm) -> Result<CaseSubmission, CoreError> {
    let mut v = FormValidator::new(form);

    let title = v.text(&TITLE);
    let description = v.text(&DESCRIPTION);
    let severity = v.level(&SEVERITY);
    let urgency = v.level(&URGENCY);
    let people_affected = v.count(&PEOPLE_AFFECTED);
    let available_resources = v.count(&AVAILABLE_RESOURCES);
    let required_skill = v.text(&REQUIRED_SKILL);

    let errors = v.into_errors();

    match (
        title,
        description,
        severity,
        urgency,
        people_affected,
        available_resources,
        required_skill,
    ) {
        (
            Some(title),
            Some(description),
            Some(severity),
            Some(urgency),
            Some(people_affected),
            Some(available_resources),
            Some(required_skill),
        ) if errors.is_empty() => Ok(CaseSubmission {
            title,
            description,
            severity,
            urgency,
            people_affected,
            available_resources,
            required_skill,
        }),
        _ => Err(CoreError::Validation(errors)),
    }
}
