// Option domains accepted by the syslog surface: facility and severity
// names, each validated at the string boundary and mapped to its libc
// constant.

use std::fmt;
use std::str::FromStr;

use nix::libc;

use crate::error::PosixError;

/// Syslog facility: the category tag routing a message to its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facility {
    Auth,
    Authpriv,
    Cron,
    #[default]
    Daemon,
    Ftp,
    Kern,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
    Lpr,
    Mail,
    News,
    Syslog,
    User,
    Uucp,
}

impl Facility {
    /// The `LOG_*` constant handed to `openlog(3)`.
    pub(crate) fn to_libc(self) -> libc::c_int {
        match self {
            Facility::Auth => libc::LOG_AUTH,
            Facility::Authpriv => libc::LOG_AUTHPRIV,
            Facility::Cron => libc::LOG_CRON,
            Facility::Daemon => libc::LOG_DAEMON,
            Facility::Ftp => libc::LOG_FTP,
            Facility::Kern => libc::LOG_KERN,
            Facility::Local0 => libc::LOG_LOCAL0,
            Facility::Local1 => libc::LOG_LOCAL1,
            Facility::Local2 => libc::LOG_LOCAL2,
            Facility::Local3 => libc::LOG_LOCAL3,
            Facility::Local4 => libc::LOG_LOCAL4,
            Facility::Local5 => libc::LOG_LOCAL5,
            Facility::Local6 => libc::LOG_LOCAL6,
            Facility::Local7 => libc::LOG_LOCAL7,
            Facility::Lpr => libc::LOG_LPR,
            Facility::Mail => libc::LOG_MAIL,
            Facility::News => libc::LOG_NEWS,
            Facility::Syslog => libc::LOG_SYSLOG,
            Facility::User => libc::LOG_USER,
            Facility::Uucp => libc::LOG_UUCP,
        }
    }

    /// The symbolic name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Facility::Auth => "auth",
            Facility::Authpriv => "authpriv",
            Facility::Cron => "cron",
            Facility::Daemon => "daemon",
            Facility::Ftp => "ftp",
            Facility::Kern => "kern",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
            Facility::Lpr => "lpr",
            Facility::Mail => "mail",
            Facility::News => "news",
            Facility::Syslog => "syslog",
            Facility::User => "user",
            Facility::Uucp => "uucp",
        }
    }
}

impl FromStr for Facility {
    type Err = PosixError;

    /// Unrecognized names are a caller contract violation, rejected before
    /// any OS call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "auth" => Facility::Auth,
            "authpriv" => Facility::Authpriv,
            "cron" => Facility::Cron,
            "daemon" => Facility::Daemon,
            "ftp" => Facility::Ftp,
            "kern" => Facility::Kern,
            "local0" => Facility::Local0,
            "local1" => Facility::Local1,
            "local2" => Facility::Local2,
            "local3" => Facility::Local3,
            "local4" => Facility::Local4,
            "local5" => Facility::Local5,
            "local6" => Facility::Local6,
            "local7" => Facility::Local7,
            "lpr" => Facility::Lpr,
            "mail" => Facility::Mail,
            "news" => Facility::News,
            "syslog" => Facility::Syslog,
            "user" => Facility::User,
            "uucp" => Facility::Uucp,
            _ => return Err(PosixError::InvalidFacility(s.to_string())),
        })
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Message severity, ordered least to most severe.
///
/// `Error` maps to the `LOG_CRIT` syslog priority rather than `LOG_ERR`.
/// That mapping is historical and kept on purpose: log consumers in the
/// field filter on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Level {
    Debug,
    Info,
    #[default]
    Notice,
    Warn,
    Error,
}

impl Level {
    /// All levels, least severe first.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warn,
        Level::Error,
    ];

    /// The syslog priority passed to `syslog(3)`.
    pub(crate) fn severity(self) -> libc::c_int {
        match self {
            Level::Debug => libc::LOG_DEBUG,
            Level::Info => libc::LOG_INFO,
            Level::Notice => libc::LOG_NOTICE,
            Level::Warn => libc::LOG_WARNING,
            Level::Error => libc::LOG_CRIT,
        }
    }

    /// The symbolic name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Priority mask admitting this level and everything more severe,
    /// in the form `setlogmask(3)` expects (one bit per priority).
    pub(crate) fn mask_through_most_severe(self) -> libc::c_int {
        let rank = Level::ALL
            .iter()
            .position(|l| *l == self)
            .unwrap_or_default();
        Level::ALL[rank..]
            .iter()
            .fold(0, |mask, level| mask | (1 << level.severity()))
    }
}

impl FromStr for Level {
    type Err = PosixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "debug" => Level::Debug,
            "info" => Level::Info,
            "notice" => Level::Notice,
            "warn" => Level::Warn,
            "error" => Level::Error,
            _ => return Err(PosixError::InvalidLevel(s.to_string())),
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
