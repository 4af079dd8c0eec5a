/*
 * Copyright 2025 Luc Lenôtre
 *
 * This file is part of Maestro.
 *
 * Maestro is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Maestro is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
 * A PARTICULAR PURPOSE. See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * Maestro. If not, see <https://www.gnu.org/licenses/>.
 */

//! The command `nologin` refuses login and records the attempt in the system log.

use libc::{LOG_AUTH, LOG_CONS, LOG_CRIT, STDIN_FILENO};
use std::ffi::{CStr, OsStr};
use std::io;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::process::exit;
use utils::syslog::Syslog;
use utils::tty;

/// The message shown to the user.
const MESSAGE: &str = "This account is currently not available.\n";
/// Placeholder for an identity that cannot be resolved.
const UNKNOWN: &str = "UNKNOWN";
/// The identifier of records in the system log.
const IDENT: &CStr = c"nologin";

/// Builds the log record for an attempt to log in as `login` on the terminal `tty`.
///
/// Missing values are replaced by a placeholder.
fn attempt_record(login: Option<&OsStr>, tty: Option<&OsStr>) -> Vec<u8> {
    let login = login.map(OsStr::as_bytes).unwrap_or(UNKNOWN.as_bytes());
    let tty = tty.map(OsStr::as_bytes).unwrap_or(UNKNOWN.as_bytes());
    [b"Attempted login by " as &[u8], login, b" on ", tty].concat()
}

/// Writes the denial message on `out`.
fn deny<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(MESSAGE.as_bytes())?;
    // `exit` does not flush
    out.flush()
}

pub fn main() -> ! {
    let terminal = tty::ttyname(STDIN_FILENO).ok();
    let login = tty::getlogin().ok();
    let record = attempt_record(login.as_deref(), terminal.as_deref());
    // The record only reaches the system logger, binary tests cannot observe it
    {
        let log = Syslog::open(IDENT, LOG_CONS, LOG_AUTH);
        log.log(LOG_CRIT, &record);
    }
    let _ = deny(&mut io::stdout());
    exit(1);
}
