//! Shared response envelope types for API handlers.
//!
//! Every response uses a `{ "data": ... }` envelope. View endpoints and
//! redirects may also carry a one-shot `notice` for the user.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-facing message attached to a view or redirect.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// `{ "data": T, "notice": ... }`, with `notice` omitted when absent.
#[derive(Debug, Serialize)]
pub struct ViewResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl<T: Serialize> ViewResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, notice: None }
    }

    pub fn with_notice(data: T, notice: Notice) -> Self {
        Self {
            data,
            notice: Some(notice),
        }
    }
}

/// `303 See Other` to `location`, with the view envelope as body so a
/// client that does not follow redirects still sees the outcome.
#[derive(Debug)]
pub struct RedirectWithNotice<T: Serialize> {
    pub location: &'static str,
    pub body: ViewResponse<T>,
}

impl<T: Serialize> RedirectWithNotice<T> {
    pub fn new(location: &'static str, data: T, notice: Notice) -> Self {
        Self {
            location,
            body: ViewResponse::with_notice(data, notice),
        }
    }
}

impl<T: Serialize> IntoResponse for RedirectWithNotice<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, self.location)],
            Json(self.body),
        )
            .into_response()
    }
}
