// Resource limit control: read and write POSIX rlimits by symbolic name.

use std::fmt;
use std::str::FromStr;

use nix::sys::resource::{self, Resource};
use tracing::debug;

use crate::error::{PosixError, Result};

/// The fixed set of resource kinds this surface exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Core,
    Cpu,
    Data,
    Fsize,
    Memlock,
    Nofile,
    Nproc,
    Rss,
    Stack,
}

impl ResourceKind {
    /// Every supported kind.
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Core,
        ResourceKind::Cpu,
        ResourceKind::Data,
        ResourceKind::Fsize,
        ResourceKind::Memlock,
        ResourceKind::Nofile,
        ResourceKind::Nproc,
        ResourceKind::Rss,
        ResourceKind::Stack,
    ];

    /// The symbolic name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Core => "CORE",
            ResourceKind::Cpu => "CPU",
            ResourceKind::Data => "DATA",
            ResourceKind::Fsize => "FSIZE",
            ResourceKind::Memlock => "MEMLOCK",
            ResourceKind::Nofile => "NOFILE",
            ResourceKind::Nproc => "NPROC",
            ResourceKind::Rss => "RSS",
            ResourceKind::Stack => "STACK",
        }
    }

    fn to_resource(self) -> Resource {
        match self {
            ResourceKind::Core => Resource::RLIMIT_CORE,
            ResourceKind::Cpu => Resource::RLIMIT_CPU,
            ResourceKind::Data => Resource::RLIMIT_DATA,
            ResourceKind::Fsize => Resource::RLIMIT_FSIZE,
            ResourceKind::Memlock => Resource::RLIMIT_MEMLOCK,
            ResourceKind::Nofile => Resource::RLIMIT_NOFILE,
            ResourceKind::Nproc => Resource::RLIMIT_NPROC,
            ResourceKind::Rss => Resource::RLIMIT_RSS,
            ResourceKind::Stack => Resource::RLIMIT_STACK,
        }
    }
}

impl FromStr for ResourceKind {
    type Err = PosixError;

    /// Unrecognized names fail with `invalid-resource` before any OS call.
    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "CORE" => ResourceKind::Core,
            "CPU" => ResourceKind::Cpu,
            "DATA" => ResourceKind::Data,
            "FSIZE" => ResourceKind::Fsize,
            "MEMLOCK" => ResourceKind::Memlock,
            "NOFILE" => ResourceKind::Nofile,
            "NPROC" => ResourceKind::Nproc,
            "RSS" => ResourceKind::Rss,
            "STACK" => ResourceKind::Stack,
            _ => return Err(PosixError::InvalidResource(s.to_string())),
        })
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read the current `(soft, hard)` limits for `kind`.
pub fn get_limits(kind: ResourceKind) -> Result<(u64, u64)> {
    resource::getrlimit(kind.to_resource()).map_err(|_| PosixError::GetrlimitFailed)
}

/// Apply new `(soft, hard)` limits for `kind`.
///
/// `None` keeps the current value for that bound. When either bound is
/// omitted, the current limits are read first and merged in, so
/// `set_limits(kind, None, None)` is a no-op. Failures report which step
/// broke: `getrlimit-failed` for the merge read, `setrlimit-failed` for the
/// write. Nothing is retried.
pub fn set_limits(kind: ResourceKind, soft: Option<u64>, hard: Option<u64>) -> Result<()> {
    let (soft, hard) = match (soft, hard) {
        (Some(soft), Some(hard)) => (soft, hard),
        _ => {
            let (cur_soft, cur_hard) = resource::getrlimit(kind.to_resource())
                .map_err(|_| PosixError::GetrlimitFailed)?;
            (soft.unwrap_or(cur_soft), hard.unwrap_or(cur_hard))
        }
    };

    resource::setrlimit(kind.to_resource(), soft, hard)
        .map_err(|_| PosixError::SetrlimitFailed)?;

    debug!(resource = kind.name(), soft, hard, "resource limits applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.name().parse::<ResourceKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["", "nofile", "NOFILES", "AS", "VMEM"] {
            let err = name.parse::<ResourceKind>().unwrap_err();
            assert_eq!(err, PosixError::InvalidResource(name.to_string()));
            assert_eq!(err.reason(), "invalid-resource");
        }
    }
}
