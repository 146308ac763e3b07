use pposix::{getgid, getpid, getuid, switch_user, PosixError, UserTarget};

#[test]
fn identity_queries_always_succeed() {
    // No failure mode: these are plain reads from the OS.
    assert_eq!(getpid().as_raw() as u32, std::process::id());
    let _ = getuid();
    let _ = getgid();
}

#[test]
fn unknown_login_name_fails_with_no_such_user() {
    let before = getuid();

    let result = switch_user(&UserTarget::from("pposix-nonexistent-login"));
    assert_eq!(result, Err(PosixError::NoSuchUser));
    assert_eq!(result.unwrap_err().reason(), "no-such-user");

    // The process uid must be untouched by a failed lookup
    assert_eq!(getuid(), before);
}

#[test]
fn switching_to_own_uid_succeeds() {
    // setuid to the real uid is always permitted, so this exercises the
    // success path without dropping privilege for the rest of the tests.
    assert!(switch_user(&UserTarget::Id(getuid())).is_ok());
}

#[test]
fn module_metadata_is_exposed() {
    assert_eq!(pposix::NAME, "pposix");
    assert!(!pposix::VERSION.is_empty());
}
