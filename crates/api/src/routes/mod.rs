pub mod cases;
pub mod health;
pub mod volunteers;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                                dashboard
/// /cases                           list (priority order)
/// /cases/new                       report form, submit (POST)
/// /cases/{id}                      single case
/// /volunteers                      list (most recent first)
/// /volunteers/search?skill=        skill search
/// /volunteers/register             registration form, submit (POST)
/// /volunteers/{id}                 single volunteer
/// /health                          service and database health
/// ```
///
/// Unmatched paths redirect to `/`.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard::dashboard))
        .nest("/cases", cases::router())
        .nest("/volunteers", volunteers::router())
        .merge(health::router())
        .fallback(handlers::fallback::not_found)
}
