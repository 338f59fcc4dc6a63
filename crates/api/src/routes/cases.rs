use axum::routing::get;
use axum::Router;

use crate::handlers::cases;
use crate::state::AppState;

/// Crisis case routes mounted at `/cases`.
///
/// ```text
/// GET   /        -> list_cases
/// GET   /new     -> case_form
/// POST  /new     -> create_case
/// GET   /{id}    -> get_case
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cases::list_cases))
        .route("/new", get(cases::case_form).post(cases::create_case))
        .route("/{id}", get(cases::get_case))
}
