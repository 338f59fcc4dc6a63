//! Volunteer availability categories, form fields, and registration
//! validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form::{ChoiceField, FieldSpec, FormValidator, RawForm, TextField};

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// The work schedule a volunteer can commit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Weekends,
    #[serde(rename = "On-call")]
    OnCall,
}

impl Availability {
    pub const ALL: [Availability; 4] = [
        Self::FullTime,
        Self::PartTime,
        Self::Weekends,
        Self::OnCall,
    ];

    /// Labels accepted by the registration form, in display order.
    pub const LABELS: [&'static str; 4] = ["Full-time", "Part-time", "Weekends", "On-call"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Weekends => "Weekends",
            Self::OnCall => "On-call",
        }
    }
}

/// Categories counted as available for deployment on the dashboard.
///
/// Every schedule category is deployable; a volunteer who cannot be
/// deployed does not register.
pub const DEPLOYABLE: [Availability; 4] = Availability::ALL;

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|availability| availability.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "availability",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Availability {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Form fields
// ---------------------------------------------------------------------------

pub const NAME: TextField = TextField {
    name: "name",
    label: "Full name",
    min_chars: 2,
    max_chars: 100,
};

pub const SKILLS: TextField = TextField {
    name: "skills",
    label: "Professional expertise",
    min_chars: 3,
    max_chars: 200,
};

pub const AVAILABILITY: ChoiceField = ChoiceField {
    name: "availability",
    label: "Deployment capacity",
    options: &Availability::LABELS,
};

/// Fields of the volunteer registration form, in display order.
pub const VOLUNTEER_FORM: [FieldSpec; 3] = [
    FieldSpec::Text(NAME),
    FieldSpec::Text(SKILLS),
    FieldSpec::Choice(AVAILABILITY),
];

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A volunteer registration that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolunteerSubmission {
    pub name: String,
    pub skills: String,
    pub availability: Availability,
}

/// Validate a volunteer registration form.
pub fn validate_registration(form: &RawForm) -> Result<VolunteerSubmission, CoreError> {
    let mut v = FormValidator::new(form);

    let name = v.text(&NAME);
    let skills = v.text(&SKILLS);
    let availability = v
        .choice(&AVAILABILITY)
        .and_then(|label| label.parse::<Availability>().ok());

    let errors = v.into_errors();

    match (name, skills, availability) {
        (Some(name), Some(skills), Some(availability)) if errors.is_empty() => {
            Ok(VolunteerSubmission {
                name,
                skills,
                availability,
            })
        }
        _ => Err(CoreError::Validation(errors)),
    }
}
