//! No-WASM application implementation
//!
//! Native flow behind the enrollment button: validate, issue the single
//! request, interpret the reply. Presentation belongs to the caller.

use crate::app::resolve_outcome;
use crate::error::Result;
use crate::interface::EnrollApi;
use crate::model::dtos::EnrollParams;

/// Enroll in one course and return where to go next.
///
/// Any failure is logged here before being re-raised, so the caller only has
/// to restore its UI and surface the message.
pub async fn enroll_in_course(
    client: &impl EnrollApi,
    params: EnrollParams<'_>,
) -> Result<String> {
    let result = try_enroll(client, params).await;

    if let Err(e) = &result {
        log::error!("Enrollment error: {e}");
    }

    result
}

async fn try_enroll(client: &impl EnrollApi, params: EnrollParams<'_>) -> Result<String> {
    params.validate()?;

    let reply = client.enroll(params.clone()).await?;
    resolve_outcome(params.course_id, reply)
}
