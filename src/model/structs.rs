use serde::{Deserialize, Serialize};

// Common data structures used across all platforms

/// Body of the enrollment endpoint's JSON reply.
///
/// Every field defaults so a partial body still parses; an unparseable body
/// degrades to `EnrollmentResponse::default()` instead of failing the flow.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EnrollmentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl EnrollmentResponse {
    /// Parse a reply body, tolerating garbage.
    pub fn from_body(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }
}

/// Raw outcome of the enrollment POST, before interpretation.
#[derive(Debug, Clone)]
pub struct EnrollReply {
    pub ok: bool,
    pub status: u16,
    pub body: EnrollmentResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_body_parses() {
        let body = EnrollmentResponse::from_body(
            r#"{"success": true, "message": "Successfully enrolled in the course", "redirect_url": "/courses/7/"}"#,
        );
        assert!(body.success);
        assert_eq!(body.redirect_url.as_deref(), Some("/courses/7/"));
        assert_eq!(
            body.message.as_deref(),
            Some("Successfully enrolled in the course")
        );
    }

    #[test]
    fn missing_fields_default() {
        let body = EnrollmentResponse::from_body(r#"{"success": true}"#);
        assert!(body.success);
        assert!(body.redirect_url.is_none());
        assert!(body.message.is_none());
    }

    #[test]
    fn garbage_body_degrades_to_default() {
        let body = EnrollmentResponse::from_body("<html>Internal Server Error</html>");
        assert!(!body.success);
        assert!(body.redirect_url.is_none());
        assert!(body.message.is_none());
    }

    #[test]
    fn empty_body_degrades_to_default() {
        let body = EnrollmentResponse::from_body("");
        assert!(!body.success);
    }
}
