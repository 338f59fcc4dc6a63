//! Handlers for crisis cases: the priority-sorted list, single-case
//! lookup, and the report form.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use impactbridge_core::crisis_case::{self, CASE_FORM};
use impactbridge_core::error::CoreError;
use impactbridge_core::form::RawForm;
use impactbridge_core::types::DbId;
use impactbridge_db::models::crisis_case::{CreateCrisisCase, CrisisCase};
use impactbridge_db::repositories::CrisisCaseRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{reject_form, FormDescription};
use crate::response::{DataResponse, Notice, RedirectWithNotice, ViewResponse};
use crate::state::AppState;

pub const CASE_CREATED_NOTICE: &str = "Crisis report filed and prioritized";

const CASE_FORM_PATH: &str = "/cases/new";

// ---------------------------------------------------------------------------
// GET /cases
// ---------------------------------------------------------------------------

/// List every case, highest priority first.
///
/// On a storage error the list is empty and carries an error notice.
pub async fn list_cases(State(state): State<AppState>) -> Json<ViewResponse<Vec<CrisisCase>>> {
    match CrisisCaseRepo::list_by_priority(&state.pool).await {
        Ok(cases) => Json(ViewResponse::new(cases)),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load crisis cases");
            Json(ViewResponse::with_notice(
                Vec::new(),
                Notice::error("Error loading crisis cases"),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// GET /cases/{id}
// ---------------------------------------------------------------------------

pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CrisisCase>>> {
    let case = CrisisCaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CrisisCase",
            id,
        }))?;

    Ok(Json(DataResponse { data: case }))
}

// ---------------------------------------------------------------------------
// GET /cases/new
// ---------------------------------------------------------------------------

pub async fn case_form() -> Json<DataResponse<FormDescription>> {
    Json(DataResponse {
        data: FormDescription {
            action: CASE_FORM_PATH,
            method: "POST",
            fields: &CASE_FORM,
        },
    })
}

// ---------------------------------------------------------------------------
// POST /cases/new
// ---------------------------------------------------------------------------

/// File a crisis report: validate, score, persist, then redirect to the
/// case list.
///
/// A submission that fails validation is redirected back to the form with
/// every message; nothing is stored.
pub async fn create_case(
    State(state): State<AppState>,
    Form(form): Form<RawForm>,
) -> AppResult<Response> {
    let submission = match crisis_case::validate_case(&form) {
        Ok(submission) => submission,
        Err(CoreError::Validation(errors)) => {
            tracing::warn!(%errors, "Crisis report rejected");
            return Ok(reject_form(CASE_FORM_PATH, errors).into_response());
        }
        Err(err) => return Err(err.into()),
    };

    let input = CreateCrisisCase::from(submission);
    let case = CrisisCaseRepo::create(&state.pool, &input).await?;

    tracing::info!(
        case_id = case.id,
        priority_score = case.priority_score,
        title = %case.title,
        "Crisis case created"
    );

    Ok(
        RedirectWithNotice::new("/cases", case, Notice::success(CASE_CREATED_NOTICE))
            .into_response(),
    )
}
