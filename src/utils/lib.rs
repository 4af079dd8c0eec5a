//! Features wrapping the system services used by `nologin`.

pub mod syslog;
pub mod tty;
