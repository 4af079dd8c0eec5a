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

//! Scoped access to the system logger.

use libc::c_int;
use std::ffi::{CStr, CString};

/// An open connection to the system logger.
///
/// The connection is closed when the handle is dropped.
pub struct Syslog(());

impl Syslog {
    /// Opens the connection to the system logger.
    ///
    /// Arguments:
    /// - `ident` is prepended to every record. libc keeps the pointer, hence the `'static`
    ///   lifetime.
    /// - `option` is the set of `LOG_*` flags to pass to `openlog`.
    /// - `facility` is the default facility of records.
    pub fn open(ident: &'static CStr, option: c_int, facility: c_int) -> Self {
        unsafe {
            libc::openlog(ident.as_ptr(), option, facility);
        }
        Self(())
    }

    /// Writes the record `msg` with the given `priority`.
    ///
    /// Failures of the logger are not reported.
    pub fn log(&self, priority: c_int, msg: &[u8]) {
        let msg = to_message(msg);
        // Never let the message be interpreted as a format string
        unsafe {
            libc::syslog(priority, c"%s".as_ptr(), msg.as_ptr());
        }
    }
}

impl Drop for Syslog {
    fn drop(&mut self) {
        unsafe {
            libc::closelog();
        }
    }
}

/// Converts `msg` to a C string, truncating it at the first NUL byte.
fn to_message(msg: &[u8]) -> CString {
    let msg = msg.split(|b| *b == 0).next().unwrap_or_default();
    CString::new(msg).unwrap_or_default()
}
