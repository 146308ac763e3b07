//! Thin bindings over a small set of POSIX process facilities: daemonization,
//! the process-wide syslog channel, user/group identity, privilege switching,
//! and resource limits. Each operation is a single short OS call (or a short
//! fixed sequence) with its failure modes reported distinctly. Unix-only.

pub mod daemon;
pub mod error;
pub mod limits;
pub mod syslog;
pub mod user;

pub use daemon::{daemonize, Daemonize};
pub use error::{PosixError, Result};
pub use limits::{get_limits, set_limits, ResourceKind};
pub use syslog::{Facility, Level, SyslogSession};
pub use user::{getgid, getpid, getuid, switch_user, UserTarget};

/// Module name exposed to embedding hosts as static metadata.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Module version exposed to embedding hosts as static metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
