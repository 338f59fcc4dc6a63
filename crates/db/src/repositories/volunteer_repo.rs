//! Repository for the `volunteers` table.

use chrono::Utc;
use impactbridge_core::types::DbId;
use impactbridge_core::volunteer::Availability;
use sqlx::SqliteConnection;

use crate::models::volunteer::{CreateVolunteer, Volunteer};
use crate::DbPool;

/// Column list for `volunteers` queries.
const COLUMNS: &str = "id, name, skills, availability, registered_at";

/// Create and read operations for volunteers.
pub struct VolunteerRepo;

impl VolunteerRepo {
    /// Register a volunteer inside its own transaction.
    pub async fn create(pool: &DbPool, input: &CreateVolunteer) -> Result<Volunteer, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let volunteer = Self::insert(&mut tx, input).await?;
        tx.commit().await?;
        Ok(volunteer)
    }

    /// Insert a volunteer on a connection the caller controls.
    pub async fn insert(
        conn: &mut SqliteConnection,
        input: &CreateVolunteer,
    ) -> Result<Volunteer, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteers (name, skills, availability, registered_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(&input.name)
            .bind(&input.skills)
            .bind(input.availability.as_str())
            .bind(Utc::now())
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteers WHERE id = ?");
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All volunteers, most recently registered first.
    pub async fn list_recent(pool: &DbPool) -> Result<Vec<Volunteer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM volunteers ORDER BY registered_at DESC, id DESC"
        );
        sqlx::query_as::<_, Volunteer>(&query).fetch_all(pool).await
    }

    /// Volunteers whose skills contain `skill`, ignoring ASCII case.
    ///
    /// Matching uses `instr`, so `%` and `_` in the input are literal.
    pub async fn search_by_skill(pool: &DbPool, skill: &str) -> Result<Vec<Volunteer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM volunteers \
             WHERE instr(lower(skills), lower(?)) > 0 \
             ORDER BY registered_at DESC, id DESC"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(skill)
            .fetch_all(pool)
            .await
    }

    pub async fn count_all(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM volunteers")
            .fetch_one(pool)
            .await
    }

    /// Count volunteers whose availability is one of `categories`.
    pub async fn count_by_availability(
        pool: &DbPool,
        categories: &[Availability],
    ) -> Result<i64, sqlx::Error> {
        if categories.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; categories.len()].join(", ");
        let query = format!("SELECT COUNT(*) FROM volunteers WHERE availability IN ({placeholders})");

        let mut q = sqlx::query_scalar::<sqlx::Sqlite, i64>(&query);
        for category in categories {
            q = q.bind(category.as_str());
        }
        q.fetch_one(pool).await
    }
}
