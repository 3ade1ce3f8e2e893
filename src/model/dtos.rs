use crate::error::{ErrorKind, Result};

/// Everything a click decision needs, read off the triggering element.
#[derive(Debug, Clone)]
pub struct ClickParams<'a> {
    pub course_id: &'a str,
    pub authenticated: bool,
    pub free_course: bool,
}

/// Common parameters for the enrollment request
#[derive(Debug, Clone)]
pub struct EnrollParams<'a> {
    pub course_id: &'a str,
    pub csrf_token: &'a str,
}

impl EnrollParams<'_> {
    /// A request is only issued for a present course id.
    pub fn validate(&self) -> Result<()> {
        if self.course_id.is_empty() {
            return Err(ErrorKind::RequestFailed("Missing course id".to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_course_id_is_rejected() {
        let params = EnrollParams {
            course_id: "",
            csrf_token: "tok",
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.user_message(), "Missing course id");
    }

    #[test]
    fn present_course_id_passes() {
        let params = EnrollParams {
            course_id: "42",
            csrf_token: "",
        };
        assert!(params.validate().is_ok());
    }
}
