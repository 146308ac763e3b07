// Privilege switching: change the calling process's user id.

use nix::errno::Errno;
use nix::unistd::{self, Uid, User};
use tracing::info;

use crate::error::{PosixError, Result};

/// Target of a [`switch_user`] call: a numeric uid, or a login name to be
/// resolved against the system user database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserTarget {
    Id(Uid),
    Name(String),
}

impl From<u32> for UserTarget {
    fn from(uid: u32) -> Self {
        UserTarget::Id(Uid::from_raw(uid))
    }
}

impl From<Uid> for UserTarget {
    fn from(uid: Uid) -> Self {
        UserTarget::Id(uid)
    }
}

impl From<&str> for UserTarget {
    fn from(name: &str) -> Self {
        UserTarget::Name(name.to_string())
    }
}

impl From<String> for UserTarget {
    fn from(name: String) -> Self {
        UserTarget::Name(name)
    }
}

/// Switch the calling process's user id to `target`.
///
/// A name target is resolved first; an unknown name fails with
/// `no-such-user` and leaves the process uid untouched. The switch itself
/// is classified by errno: an id the kernel rejects is `invalid-uid`, a
/// switch the caller lacks privilege for is `permission-denied`, anything
/// else is `unknown-error`.
///
/// Dropping privilege is one-way for an unprivileged process; sequence this
/// call after everything that still needs the old uid. The group id is left
/// untouched — switching it is a separate concern this surface does not
/// cover.
pub fn switch_user(target: &UserTarget) -> Result<()> {
    let uid = match target {
        UserTarget::Id(uid) => *uid,
        UserTarget::Name(name) => match User::from_name(name) {
            Ok(Some(entry)) => entry.uid,
            // A lookup error and a missing entry read the same to the
            // caller: no usable uid for that name.
            Ok(None) | Err(_) => return Err(PosixError::NoSuchUser),
        },
    };

    unistd::setuid(uid).map_err(|errno| match errno {
        Errno::EINVAL => PosixError::InvalidUid,
        Errno::EPERM => PosixError::PermissionDenied,
        _ => PosixError::UnknownError,
    })?;

    info!(uid = uid.as_raw(), "switched process user id");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_fails_without_touching_uid() {
        let before = unistd::getuid();
        let result = switch_user(&UserTarget::from("no-such-login-here"));
        assert_eq!(result, Err(PosixError::NoSuchUser));
        assert_eq!(unistd::getuid(), before);
    }

    #[test]
    fn switch_to_current_uid_succeeds() {
        // setuid to the real uid is always permitted
        let me = unistd::getuid();
        assert!(switch_user(&UserTarget::Id(me)).is_ok());
    }

    #[test]
    fn switch_to_root_requires_privilege() {
        if unistd::getuid().is_root() {
            // Nothing to deny when already root
            return;
        }
        assert_eq!(
            switch_user(&UserTarget::from(0u32)),
            Err(PosixError::PermissionDenied)
        );
    }

    #[test]
    fn target_conversions() {
        assert_eq!(UserTarget::from(1000u32), UserTarget::Id(Uid::from_raw(1000)));
        assert_eq!(
            UserTarget::from("postgres"),
            UserTarget::Name("postgres".to_string())
        );
    }
}
