//! Volunteer entity model and DTOs.

use impactbridge_core::types::{DbId, Timestamp};
use impactbridge_core::volunteer::{Availability, VolunteerSubmission};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `volunteers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Volunteer {
    pub id: DbId,
    pub name: String,
    pub skills: String,
    #[sqlx(try_from = "String")]
    pub availability: Availability,
    pub registered_at: Timestamp,
}

/// DTO for registering a volunteer.
#[derive(Debug, Clone)]
pub struct CreateVolunteer {
    pub name: String,
    pub skills: String,
    pub availability: Availability,
}

impl From<VolunteerSubmission> for CreateVolunteer {
    fn from(submission: VolunteerSubmission) -> Self {
        Self {
            name: submission.name,
            skills: submission.skills,
            availability: submission.availability,
        }
    }
}

/// Query parameters for searching volunteers by skill.
#[derive(Debug, Deserialize)]
pub struct SkillSearchParams {
    pub skill: Option<String>,
}
