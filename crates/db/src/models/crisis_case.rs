//! Crisis case entity model and DTOs.

use impactbridge_core::crisis_case::{CaseStatus, CaseSubmission};
use impactbridge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `crisis_cases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CrisisCase {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub severity: i64,
    pub people_affected: i64,
    pub urgency: i64,
    pub available_resources: i64,
    pub required_skill: String,
    pub priority_score: i64,
    #[sqlx(try_from = "String")]
    pub status: CaseStatus,
    pub created_at: Timestamp,
}

/// DTO for inserting a crisis case.
///
/// `priority_score` is fixed here, at creation, and never recomputed.
#[derive(Debug, Clone)]
pub struct CreateCrisisCase {
    pub title: String,
    pub description: String,
    pub severity: i64,
    pub people_affected: i64,
    pub urgency: i64,
    pub available_resources: i64,
    pub required_skill: String,
    pub priority_score: i64,
    pub status: CaseStatus,
}

impl From<CaseSubmission> for CreateCrisisCase {
    fn from(submission: CaseSubmission) -> Self {
        let priority_score = submission.priority_score();
        Self {
            title: submission.title,
            description: submission.description,
            severity: submission.severity,
            people_affected: submission.people_affected,
            urgency: submission.urgency,
            available_resources: submission.available_resources,
            required_skill: submission.required_skill,
            priority_score,
            status: CaseStatus::Pending,
        }
    }
}
