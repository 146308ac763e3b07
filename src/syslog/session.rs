// The process-wide syslog session and its identity ownership.

use std::ffi::CString;

use nix::libc;
use tracing::debug;

use crate::error::{PosixError, Result};

use super::{Facility, Level};

/// The process-wide syslog session.
///
/// The operating system keeps exactly one syslog channel per process, and
/// `openlog(3)` stores the identity pointer it is given instead of copying
/// the string. This type makes that global explicit: it owns the identity
/// buffer for as long as the channel is open, and the embedding host owns
/// the one instance and passes it into every call that needs it.
///
/// There is no internal locking. The host serializes all calls; `open`,
/// `close`, `log` and `set_min_level` racing from independent threads
/// without external synchronization is a caller bug. After a fork both
/// processes inherit the open channel and each side owns its copy of the
/// session separately.
#[derive(Debug, Default)]
pub struct SyslogSession {
    // Kept alive while the channel is open; openlog(3) retains the pointer.
    ident: Option<CString>,
}

impl SyslogSession {
    /// A closed session. Opening it is what claims the process-wide channel.
    pub fn new() -> Self {
        Self { ident: None }
    }

    /// Open (or re-open) the channel, tagged with `identity` and routed to
    /// `facility`. Every subsequent message carries the identity and the
    /// process id.
    ///
    /// Re-opening replaces the previous session; its identity buffer is
    /// released only after the new registration is in place, since libc may
    /// read the old pointer up to that moment. An identity containing a NUL
    /// byte is a caller contract violation (`invalid-identity`).
    pub fn open(&mut self, identity: &str, facility: Facility) -> Result<()> {
        let ident = CString::new(identity).map_err(|_| PosixError::InvalidIdentity)?;
        unsafe { libc::openlog(ident.as_ptr(), libc::LOG_PID, facility.to_libc()) };
        self.ident = Some(ident);
        debug!(identity, facility = facility.name(), "syslog channel opened");
        Ok(())
    }

    /// Write `message` to the channel at `level`.
    ///
    /// If called before any [`open`], the message goes to libc's default
    /// channel: `user` facility, tagged with the process name. That is the
    /// documented `syslog(3)` behavior, not a silent no-op.
    ///
    /// [`open`]: SyslogSession::open
    pub fn log(&self, level: Level, message: &str) {
        // Fire-and-forget call, so an interior NUL is stripped rather than
        // reported; it would otherwise truncate the message inside libc.
        let message = match CString::new(message) {
            Ok(c) => c,
            Err(_) => CString::new(message.replace('\0', "")).unwrap_or_default(),
        };
        unsafe { libc::syslog(level.severity(), c"%s".as_ptr(), message.as_ptr()) };
    }

    /// Install a severity floor: `level` and everything more severe pass,
    /// anything below is suppressed by libc before it reaches the log.
    pub fn set_min_level(&self, level: Level) {
        unsafe { libc::setlogmask(level.mask_through_most_severe()) };
    }

    /// Close the channel and release the retained identity.
    ///
    /// Closing an already closed session is not an error.
    pub fn close(&mut self) {
        unsafe { libc::closelog() };
        self.ident = None;
    }

    /// The identity the channel is currently tagged with, if open.
    pub fn identity(&self) -> Option<&str> {
        self.ident.as_deref().and_then(|c| c.to_str().ok())
    }

    /// Whether an `open` is in effect.
    pub fn is_open(&self) -> bool {
        self.ident.is_some()
    }
}

impl Drop for SyslogSession {
    fn drop(&mut self) {
        // The identity buffer must not outlive the registration libc holds.
        if self.ident.is_some() {
            self.close();
        }
    }
}
