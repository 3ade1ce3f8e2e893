//! Application module - drives the enrollment button flow
//!
//! Click classification and reply interpretation are platform-independent and
//! live here; the DOM controller (WASM) and the native flow each sit behind
//! their feature gate.

use crate::error::{Error, ErrorKind, Result};
use crate::model::dtos::ClickParams;
use crate::model::structs::EnrollReply;

// Platform-specific modules
#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::*;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::*;

/// What a click on an enrollment button turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Unauthenticated: leave default navigation alone, the login modal owns it.
    PassThrough,
    /// Free course: issue the enrollment request.
    EnrollFree,
    /// Paid course: hand over to the payment page.
    RedirectToPayment(String),
}

pub fn classify_click(params: &ClickParams<'_>) -> ClickAction {
    if !params.authenticated {
        return ClickAction::PassThrough;
    }
    if params.free_course {
        ClickAction::EnrollFree
    } else {
        ClickAction::RedirectToPayment(payment_url(params.course_id))
    }
}

pub fn payment_url(course_id: &str) -> String {
    format!("/payment/?course_id={course_id}")
}

/// Default landing page after a successful enrollment.
pub fn course_url(course_id: &str) -> String {
    format!("/courses/{course_id}/")
}

/// Turn the raw reply into a navigation target or a `RequestFailed`.
///
/// A non-2xx status fails with the body's message when the body happened to
/// parse; `success: false` likewise. The success target is the backend's
/// `redirect_url` when given, else the course page.
pub fn resolve_outcome(course_id: &str, reply: EnrollReply) -> Result<String> {
    if !reply.ok {
        let msg = reply
            .body
            .message
            .unwrap_or_else(|| "Failed to enroll in course".to_string());
        return Err(ErrorKind::RequestFailed(msg).into());
    }

    if reply.body.success {
        Ok(reply
            .body
            .redirect_url
            .unwrap_or_else(|| course_url(course_id)))
    } else {
        let msg = reply
            .body
            .message
            .unwrap_or_else(|| "Enrollment failed".to_string());
        Err(ErrorKind::RequestFailed(msg).into())
    }
}

/// Text of the inline error banner shown for a failed free enrollment.
pub fn error_banner_text(err: &Error) -> String {
    format!("Enrollment failed: {}", err.user_message())
}
