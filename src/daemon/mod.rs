// Daemon module - detaching the calling process into the background

mod daemonize;

pub use daemonize::{daemonize, Daemonize};
