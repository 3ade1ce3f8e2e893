#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::model::dtos::EnrollParams;
use crate::model::structs::EnrollReply;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// The single wire operation behind the enrollment button.
pub trait EnrollApi {
    /// POST the enrollment for one course and return the raw reply.
    async fn enroll(&self, params: EnrollParams<'_>) -> Result<EnrollReply>;
}
