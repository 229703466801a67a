use dioxus::prelude::ServerFnError;
use serde_json::json;

use crate::ValidationError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_anyhow($crate::internal_anyhow_dont_use!($($arg)*))
    };
}

/// The error type shared by the server crates.
///
/// Anything implementing `std::error::Error` converts into it with `?`. It carries
/// an HTTP-style status so the client can tell a rejected form (400) or an
/// expired session (401) from a server failure (500).
pub struct Error {
    inner: anyhow::Error,
    status: u16,
}

impl Error {
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const INTERNAL: u16 = 500;

    pub fn from_anyhow(inner: anyhow::Error) -> Self {
        Self {
            inner,
            status: Self::INTERNAL,
        }
    }

    /// Attach context, keeping the status.
    pub fn context(self, context: impl std::fmt::Display + Send + Sync + 'static) -> Self {
        Self {
            inner: self.inner.context(context),
            status: self.status,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn unauthorized(message: impl std::fmt::Display) -> Self {
        Self::msg(message).with_status(Self::UNAUTHORIZED)
    }

    pub fn bad_request(message: impl std::fmt::Display) -> Self {
        Self::msg(message).with_status(Self::BAD_REQUEST)
    }

    fn msg(message: impl std::fmt::Display) -> Self {
        Self::from_anyhow(anyhow::Error::msg(message.to_string()))
    }

    /// The top-level message followed by every cause.
    pub fn chain(&self) -> Vec<String> {
        self.inner.chain().map(|e| e.to_string()).collect()
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::from_anyhow(anyhow::Error::new(error))
    }
}

/// A rejected form is the caller's fault.
impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Self::bad_request(error)
    }
}

impl From<Error> for anyhow::Error {
    fn from(error: Error) -> Self {
        error.inner
    }
}

impl From<Error> for ServerFnError {
    fn from(error: Error) -> Self {
        let backtrace = match error.inner.backtrace().status() {
            std::backtrace::BacktraceStatus::Captured => {
                Some(error.inner.backtrace().to_string())
            }
            _ => None,
        };

        ServerFnError::ServerError {
            message: error.to_string(),
            code: error.status,
            details: Some(json!({
                "chain": error.chain(),
                "backtrace": backtrace,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_internal_status() {
        fn fails() -> Result<()> {
            Err::<(), _>(std::io::Error::other("disk on fire"))?;
            Ok(())
        }

        let error = fails().unwrap_err();
        assert_eq!(error.status(), Error::INTERNAL);
        assert_eq!(error.to_string(), "disk on fire");
    }

    #[test]
    fn err_macro_formats_message() {
        let name = "shift";
        let error = crate::err!("unknown {name}");
        assert_eq!(error.to_string(), "unknown shift");
    }

    #[test]
    fn server_error_carries_status_and_chain() {
        let inner = anyhow::Error::msg("connection refused").context("failed to list shifts");
        let error = Error::from_anyhow(inner).with_status(Error::UNAUTHORIZED);

        match ServerFnError::from(error) {
            ServerFnError::ServerError {
                message,
                code,
                details,
            } => {
                assert_eq!(message, "failed to list shifts");
                assert_eq!(code, 401);
                let chain = details.unwrap()["chain"].clone();
                assert_eq!(chain, json!(["failed to list shifts", "connection refused"]));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn validation_error_becomes_bad_request() {
        let error = Error::from(ValidationError::Invalid {
            field: "Time in",
            reason: "must be a time like 08:00",
        });
        assert_eq!(error.status(), Error::BAD_REQUEST);

        match ServerFnError::from(error) {
            ServerFnError::ServerError { message, code, .. } => {
                assert_eq!(code, 400);
                assert_eq!(message, "Time in must be a time like 08:00.");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
