//! Handler for the dashboard overview at `/`.

use axum::extract::State;
use axum::Json;
use impactbridge_core::crisis_case::CaseStatus;
use impactbridge_core::dashboard::{DashboardCounts, DashboardStats};
use impactbridge_core::priority::HIGH_PRIORITY_THRESHOLD;
use impactbridge_core::volunteer::DEPLOYABLE;
use impactbridge_db::repositories::{CrisisCaseRepo, VolunteerRepo};
use impactbridge_db::DbPool;

use crate::response::{Notice, ViewResponse};
use crate::state::AppState;

/// GET / -- overview statistics.
///
/// Falls back to zeroed statistics with an error notice when the counts
/// cannot be read.
pub async fn dashboard(State(state): State<AppState>) -> Json<ViewResponse<DashboardStats>> {
    match load_counts(&state.pool).await {
        Ok(counts) => Json(ViewResponse::new(DashboardStats::from(counts))),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load dashboard statistics");
            Json(ViewResponse::with_notice(
                DashboardStats::default(),
                Notice::error("Error loading dashboard statistics"),
            ))
        }
    }
}

async fn load_counts(pool: &DbPool) -> Result<DashboardCounts, sqlx::Error> {
    let (total_cases, high_priority_cases, completed_cases, active_cases, available_volunteers) =
        tokio::try_join!(
            CrisisCaseRepo::count_all(pool),
            CrisisCaseRepo::count_with_priority_at_least(pool, HIGH_PRIORITY_THRESHOLD),
            CrisisCaseRepo::count_by_status(pool, CaseStatus::Completed),
            CrisisCaseRepo::count_by_status(pool, CaseStatus::Active),
            VolunteerRepo::count_by_availability(pool, &DEPLOYABLE),
        )?;

    Ok(DashboardCounts {
        total_cases,
        high_priority_cases,
        completed_cases,
        active_cases,
        available_volunteers,
    })
}
