// Syslog module - the process-wide system log channel

mod options;
mod session;

pub use options::{Facility, Level};
pub use session::SyslogSession;
