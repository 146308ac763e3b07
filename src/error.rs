use thiserror::Error;

/// Main error type for the pposix bindings.
///
/// The `Display` form of every variant is a short machine-readable reason
/// code. Embedding hosts surface failures as a boolean flag plus this code,
/// so the strings are part of the contract and must stay stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PosixError {
    // Daemonization errors
    #[error("already-daemonized")]
    AlreadyDaemonized,

    #[error("fork-failed")]
    ForkFailed,

    #[error("setsid-failed")]
    SetsidFailed,

    // Privilege switch errors
    #[error("no-such-user")]
    NoSuchUser,

    #[error("invalid-uid")]
    InvalidUid,

    #[error("permission-denied")]
    PermissionDenied,

    #[error("unknown-error")]
    UnknownError,

    // Resource limit errors
    #[error("invalid-resource")]
    InvalidResource(String),

    #[error("getrlimit-failed")]
    GetrlimitFailed,

    #[error("setrlimit-failed")]
    SetrlimitFailed,

    // Caller contract violations, rejected at the string-to-enum boundary
    // before any OS call is made
    #[error("invalid-facility")]
    InvalidFacility(String),

    #[error("invalid-level")]
    InvalidLevel(String),

    #[error("invalid-identity")]
    InvalidIdentity,
}

impl PosixError {
    /// The stable reason code for this failure, identical to its `Display`
    /// output.
    pub fn reason(&self) -> &'static str {
        match self {
            PosixError::AlreadyDaemonized => "already-daemonized",
            PosixError::ForkFailed => "fork-failed",
            PosixError::SetsidFailed => "setsid-failed",
            PosixError::NoSuchUser => "no-such-user",
            PosixError::InvalidUid => "invalid-uid",
            PosixError::PermissionDenied => "permission-denied",
            PosixError::UnknownError => "unknown-error",
            PosixError::InvalidResource(_) => "invalid-resource",
            PosixError::GetrlimitFailed => "getrlimit-failed",
            PosixError::SetrlimitFailed => "setrlimit-failed",
            PosixError::InvalidFacility(_) => "invalid-facility",
            PosixError::InvalidLevel(_) => "invalid-level",
            PosixError::InvalidIdentity => "invalid-identity",
        }
    }
}

/// Result type alias for pposix operations
pub type Result<T> = std::result::Result<T, PosixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_reason_code() {
        let cases = [
            PosixError::AlreadyDaemonized,
            PosixError::ForkFailed,
            PosixError::SetsidFailed,
            PosixError::NoSuchUser,
            PosixError::InvalidUid,
            PosixError::PermissionDenied,
            PosixError::UnknownError,
            PosixError::InvalidResource("BOGUS".to_string()),
            PosixError::GetrlimitFailed,
            PosixError::SetrlimitFailed,
            PosixError::InvalidFacility("bogus".to_string()),
            PosixError::InvalidLevel("fatal".to_string()),
            PosixError::InvalidIdentity,
        ];

        for err in cases {
            assert_eq!(err.to_string(), err.reason());
        }
    }
}
