// Read-only process identity queries. All three always succeed.

use nix::unistd::{self, Gid, Pid, Uid};

/// Process id of the calling process.
pub fn getpid() -> Pid {
    unistd::getpid()
}

/// Real user id of the calling process.
pub fn getuid() -> Uid {
    unistd::getuid()
}

/// Real group id of the calling process.
pub fn getgid() -> Gid {
    unistd::getgid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pid_matches_std() {
        assert_eq!(getpid().as_raw() as u32, std::process::id());
    }

    #[test]
    fn queries_are_stable_across_calls() {
        assert_eq!(getuid(), getuid());
        assert_eq!(getgid(), getgid());
    }
}
