use axum::routing::get;
use axum::Router;

use crate::handlers::volunteers;
use crate::state::AppState;

/// Volunteer routes mounted at `/volunteers`.
///
/// ```text
/// GET   /            -> list_volunteers
/// GET   /search      -> search_volunteers (?skill=)
/// GET   /register    -> registration_form
/// POST  /register    -> register_volunteer
/// GET   /{id}        -> get_volunteer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(volunteers::list_volunteers))
        .route("/search", get(volunteers::search_volunteers))
        .route(
            "/register",
            get(volunteers::registration_form).post(volunteers::register_volunteer),
        )
        .route("/{id}", get(volunteers::get_volunteer))
}
