//! Repository for the `crisis_cases` table.

use chrono::Utc;
use impactbridge_core::crisis_case::CaseStatus;
use impactbridge_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::crisis_case::{CreateCrisisCase, CrisisCase};
use crate::DbPool;

/// Column list for `crisis_cases` queries.
const COLUMNS: &str = "\
    id, title, description, severity, people_affected, urgency, \
    available_resources, required_skill, priority_score, status, created_at";

/// Create and read operations for crisis cases. Cases are never updated or
/// deleted.
pub struct CrisisCaseRepo;

impl CrisisCaseRepo {
    /// Insert a crisis case inside its own transaction, returning the full
    /// row with its assigned id and creation timestamp.
    ///
    /// If any statement fails the transaction is dropped, which rolls it
    /// back.
    pub async fn create(pool: &DbPool, input: &CreateCrisisCase) -> Result<CrisisCase, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let case = Self::insert(&mut tx, input).await?;
        tx.commit().await?;
        Ok(case)
    }

    /// Insert a crisis case on a connection the caller controls, typically
    /// an open transaction batching several inserts.
    pub async fn insert(
        conn: &mut SqliteConnection,
        input: &CreateCrisisCase,
    ) -> Result<CrisisCase, sqlx::Error> {
        let query = format!(
            "INSERT INTO crisis_cases \
                (title, description, severity, people_affected, urgency, \
                 available_resources, required_skill, priority_score, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CrisisCase>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.severity)
            .bind(input.people_affected)
            .bind(input.urgency)
            .bind(input.available_resources)
            .bind(&input.required_skill)
            .bind(input.priority_score)
            .bind(input.status.as_str())
            .bind(Utc::now())
            .fetch_one(conn)
            .await
    }

    /// Find a crisis case by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<CrisisCase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crisis_cases WHERE id = ?");
        sqlx::query_as::<_, CrisisCase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All cases, highest priority first. Equal scores list the newest case
    /// first.
    pub async fn list_by_priority(pool: &DbPool) -> Result<Vec<CrisisCase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM crisis_cases \
             ORDER BY priority_score DESC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, CrisisCase>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn count_all(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM crisis_cases")
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_status(pool: &DbPool, status: CaseStatus) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM crisis_cases WHERE status = ?")
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Count cases whose priority score is at least `threshold`.
    pub async fn count_with_priority_at_least(
        pool: &DbPool,
        threshold: i64,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM crisis_cases WHERE priority_score >= ?")
            .bind(threshold)
            .fetch_one(pool)
            .await
    }
}
