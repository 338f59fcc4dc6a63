pub mod cases;
pub mod dashboard;
pub mod fallback;
pub mod volunteers;

use impactbridge_core::form::{FieldSpec, ValidationErrors};
use serde::Serialize;

use crate::response::{Notice, RedirectWithNotice};

/// Description of an HTML-style form: where it posts and which fields it
/// takes, with the bounds enforced on submission.
#[derive(Debug, Serialize)]
pub struct FormDescription {
    pub action: &'static str,
    pub method: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Body of a form submission that failed validation.
#[derive(Debug, Serialize)]
pub struct RejectedForm {
    pub errors: ValidationErrors,
}

/// Redirect a rejected submission back to its form, carrying every
/// validation message.
pub fn reject_form(
    form_path: &'static str,
    errors: ValidationErrors,
) -> RedirectWithNotice<RejectedForm> {
    let notice = Notice::error(errors.to_string());
    RedirectWithNotice::new(form_path, RejectedForm { errors }, notice)
}
