// User module - process identity queries and privilege switching

mod ident;
mod switch;

pub use ident::{getgid, getpid, getuid};
pub use switch::{switch_user, UserTarget};
