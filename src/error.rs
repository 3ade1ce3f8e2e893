pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    /// Message suitable for showing to the user in the error banner.
    ///
    /// `RequestFailed` carries the backend's own wording; every other kind
    /// collapses to a generic fallback.
    pub fn user_message(&self) -> String {
        match &*self.inner {
            ErrorKind::RequestFailed(msg) => msg.clone(),
            _ => "An error occurred".to_string(),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    SerdeJsonError(serde_json::Error),
    #[cfg(feature = "wasm")]
    DomError(String),
    /// Page is missing the payment provider key; enrollment stays disabled.
    SetupError(String),
    /// The enrollment endpoint rejected the request or reported failure.
    RequestFailed(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::DomError(ref e) => write!(f, "DomError: {e:?}"),
            ErrorKind::SetupError(ref e) => write!(f, "SetupError: {e:?}"),
            ErrorKind::RequestFailed(ref e) => write!(f, "RequestFailed: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::DomError(ref e) => write!(f, "DomError: {e:?}"),
            ErrorKind::SetupError(ref e) => write!(f, "SetupError: {e}"),
            ErrorKind::RequestFailed(ref e) => write!(f, "RequestFailed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_keeps_backend_wording() {
        let err = Error::from(ErrorKind::RequestFailed("Course is full".to_string()));
        assert_eq!(err.user_message(), "Course is full");
        assert_eq!(err.to_string(), "RequestFailed: Course is full");
    }

    #[test]
    fn other_kinds_collapse_to_generic_message() {
        let err = Error::from(ErrorKind::SetupError("Stripe public key is missing".to_string()));
        assert_eq!(err.user_message(), "An error occurred");
    }

    #[test]
    fn serde_errors_convert() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = bad.into();
        assert!(matches!(*err.inner, ErrorKind::SerdeJsonError(_)));
    }
}
