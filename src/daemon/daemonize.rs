// Daemonization support for Unix systems

use crate::error::{PosixError, Result};

use nix::libc;
use nix::unistd::{fork, getppid, setsid, ForkResult, Pid};
use tracing::warn;

/// Outcome of a successful [`daemonize`] call.
///
/// Both sides of the first fork see success: the original process learns the
/// child's pid and carries on (typically to report and exit), while the
/// detached grandchild continues as the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Daemonize {
    /// We are the original process; the daemon-to-be is `child`.
    Parent { child: Pid },
    /// We are the detached daemon.
    Daemon,
}

/// Fork the calling process into a detached background session.
///
/// Classic double-fork: the first fork hands control back to the caller in
/// the parent, the child starts a new session and closes its standard
/// streams, and a second fork leaves the survivor unable to ever reacquire
/// a controlling terminal. The intermediate parent of the second fork exits
/// by design; the first parent never waits on its child.
///
/// Each failing step reports its own reason (`already-daemonized`,
/// `fork-failed`, `setsid-failed`) so the caller can log precisely why
/// daemonization failed. Nothing is retried.
///
/// Any other process-wide state, notably an open [`SyslogSession`], is
/// duplicated into the child and separately owned on each side afterwards.
///
/// [`SyslogSession`]: crate::syslog::SyslogSession
pub fn daemonize() -> Result<Daemonize> {
    // Already reparented to the reaper means a previous daemonization ran.
    if getppid() == Pid::from_raw(1) {
        return Err(PosixError::AlreadyDaemonized);
    }

    // First fork: the parent's job ends here
    match unsafe { fork() } {
        Ok(ForkResult::Parent { child }) => {
            return Ok(Daemonize::Parent { child });
        }
        Ok(ForkResult::Child) => {
            // Child continues
        }
        Err(_) => {
            return Err(PosixError::ForkFailed);
        }
    }

    // Create a new session, detaching from the controlling terminal
    setsid().map_err(|_| PosixError::SetsidFailed)?;

    // Close stdin, stdout, stderr. Best-effort: an already-closed fd is fine.
    unsafe {
        libc::close(libc::STDIN_FILENO);
        libc::close(libc::STDOUT_FILENO);
        libc::close(libc::STDERR_FILENO);
    }

    // Second fork so the survivor is not a session leader and can never
    // reacquire a controlling terminal. The intermediate parent exits.
    match unsafe { fork() } {
        Ok(ForkResult::Parent { .. }) => {
            std::process::exit(0);
        }
        Ok(ForkResult::Child) => {
            // Child continues as the daemon
        }
        Err(e) => {
            // The session detach already succeeded; running as a session
            // leader is tolerable, losing the daemon is not.
            warn!("second fork failed, continuing as session leader: {}", e);
        }
    }

    Ok(Daemonize::Daemon)
}

#[cfg(test)]
mod tests {
    use super::*;

    // daemonize() itself cannot run under the test harness: it would fork
    // the test process and exit the intermediate parent. The fork path is
    // exercised by embedding hosts; here we pin down the outcome type.

    #[test]
    fn parent_outcome_carries_child_pid() {
        let outcome = Daemonize::Parent {
            child: Pid::from_raw(4242),
        };
        match outcome {
            Daemonize::Parent { child } => assert_eq!(child.as_raw(), 4242),
            Daemonize::Daemon => panic!("expected parent outcome"),
        }
    }

    #[test]
    fn outcomes_are_distinct() {
        let parent = Daemonize::Parent {
            child: Pid::from_raw(1),
        };
        assert_ne!(parent, Daemonize::Daemon);
    }
}
