//! Probe error types.
//!
//! Classifies failed connection attempts into "server not yet available"
//! versus everything else, which is all the polling loop needs.

use thiserror::Error;

/// Result alias for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// A failed connection attempt, classified for the polling loop.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The server is not accepting connections yet (refused, unresolvable,
    /// or still initializing). The loop retries these quietly.
    #[error("database not yet available: {0}")]
    Unavailable(String),

    /// Any other failure from the connect attempt (malformed port, protocol
    /// violation, ...). Retried as well unless fail-fast is enabled.
    #[error("{kind}: {message}")]
    Other { kind: String, message: String },
}

impl ProbeError {
    /// Builds an `Other` error from a kind label and message.
    pub fn other(kind: impl Into<String>, message: impl ToString) -> Self {
        ProbeError::Other {
            kind: kind.into(),
            message: message.to_string(),
        }
    }

    /// Whether the error means the server is simply not up yet.
    pub fn is_transient(&self) -> bool {
        matches!(self, ProbeError::Unavailable(_))
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &str {
        match self {
            ProbeError::Unavailable(_) => "unavailable",
            ProbeError::Other { kind, .. } => kind,
        }
    }
}

impl From<sqlx::Error> for ProbeError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // Network-level failures and server-side rejections: the server
            // is unreachable or still coming up (a MySQL container answers
            // with auth errors while it initializes).
            sqlx::Error::Io(e) => ProbeError::Unavailable(e.to_string()),
            sqlx::Error::Tls(e) => ProbeError::Unavailable(e.to_string()),
            sqlx::Error::Database(e) => ProbeError::Unavailable(e.to_string()),
            sqlx::Error::PoolTimedOut => {
                ProbeError::Unavailable("timed out waiting for a connection".into())
            }
            sqlx::Error::Configuration(e) => ProbeError::other("configuration", e),
            sqlx::Error::Protocol(e) => ProbeError::other("protocol", e),
            other => ProbeError::other("driver", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_is_transient() {
        let err = ProbeError::from(sqlx::Error::Io(io::Error::from(
            io::ErrorKind::ConnectionRefused,
        )));
        assert!(err.is_transient());
        assert_eq!(err.kind(), "unavailable");
    }

    #[test]
    fn test_configuration_error_is_not_transient() {
        let err = ProbeError::from(sqlx::Error::Configuration("bad option".into()));
        assert!(!err.is_transient());
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn test_protocol_error_keeps_message() {
        let err = ProbeError::from(sqlx::Error::Protocol("unexpected packet".into()));
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "protocol: unexpected packet");
    }

    #[test]
    fn test_pool_timeout_is_transient() {
        assert!(ProbeError::from(sqlx::Error::PoolTimedOut).is_transient());
    }
}
