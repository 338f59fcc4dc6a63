//! Handlers for volunteers: the registration list, skill search, lookup,
//! and the registration form.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use impactbridge_core::error::CoreError;
use impactbridge_core::form::RawForm;
use impactbridge_core::types::DbId;
use impactbridge_core::volunteer::{self, VOLUNTEER_FORM};
use impactbridge_db::models::volunteer::{CreateVolunteer, SkillSearchParams, Volunteer};
use impactbridge_db::repositories::VolunteerRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{reject_form, FormDescription};
use crate::response::{DataResponse, Notice, RedirectWithNotice, ViewResponse};
use crate::state::AppState;

pub const VOLUNTEER_REGISTERED_NOTICE: &str = "Personnel registered and ready for deployment";

const REGISTRATION_FORM_PATH: &str = "/volunteers/register";

// ---------------------------------------------------------------------------
// GET /volunteers
// ---------------------------------------------------------------------------

/// List every volunteer, most recently registered first.
pub async fn list_volunteers(State(state): State<AppState>) -> Json<ViewResponse<Vec<Volunteer>>> {
    match VolunteerRepo::list_recent(&state.pool).await {
        Ok(volunteers) => Json(ViewResponse::new(volunteers)),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load volunteers");
            Json(ViewResponse::with_notice(
                Vec::new(),
                Notice::error("Error loading personnel"),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// GET /volunteers/search?skill=
// ---------------------------------------------------------------------------

pub async fn search_volunteers(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchParams>,
) -> AppResult<Json<DataResponse<Vec<Volunteer>>>> {
    let skill = params
        .skill
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("The 'skill' query parameter is required".into()))?;

    let volunteers = VolunteerRepo::search_by_skill(&state.pool, skill).await?;

    Ok(Json(DataResponse { data: volunteers }))
}

// ---------------------------------------------------------------------------
// GET /volunteers/{id}
// ---------------------------------------------------------------------------

pub async fn get_volunteer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Volunteer>>> {
    let volunteer = VolunteerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }))?;

    Ok(Json(DataResponse { data: volunteer }))
}

// ---------------------------------------------------------------------------
// GET /volunteers/register
// ---------------------------------------------------------------------------

pub async fn registration_form() -> Json<DataResponse<FormDescription>> {
    Json(DataResponse {
        data: FormDescription {
            action: REGISTRATION_FORM_PATH,
            method: "POST",
            fields: &VOLUNTEER_FORM,
        },
    })
}

// ---------------------------------------------------------------------------
// POST /volunteers/register
// ---------------------------------------------------------------------------

/// Register a volunteer, then redirect to the volunteer list. Invalid
/// registrations go back to the form.
pub async fn register_volunteer(
    State(state): State<AppState>,
    Form(form): Form<RawForm>,
) -> AppResult<Response> {
    let submission = match volunteer::validate_registration(&form) {
        Ok(submission) => submission,
        Err(CoreError::Validation(errors)) => {
            tracing::warn!(%errors, "Volunteer registration rejected");
            return Ok(reject_form(REGISTRATION_FORM_PATH, errors).into_response());
        }
        Err(err) => return Err(err.into()),
    };

    let input = CreateVolunteer::from(submission);
    let volunteer = VolunteerRepo::create(&state.pool, &input).await?;

    tracing::info!(
        volunteer_id = volunteer.id,
        name = %volunteer.name,
        availability = %volunteer.availability,
        "Volunteer registered"
    );

    Ok(RedirectWithNotice::new(
        "/volunteers",
        volunteer,
        Notice::success(VOLUNTEER_REGISTERED_NOTICE),
    )
    .into_response())
}
