use axum::http::Uri;
use axum::response::IntoResponse;

use crate::response::{Notice, RedirectWithNotice};

/// Any unmatched route redirects to the dashboard with a notice.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!(%uri, "Route not found");
    RedirectWithNotice::new("/", (), Notice::error("Page not found"))
}
