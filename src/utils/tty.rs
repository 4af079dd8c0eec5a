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

//! Terminal and session identity of the calling process.

use std::ffi::{CStr, OsString};
use std::io;
use std::os::fd::RawFd;
use std::os::unix::ffi::OsStringExt;

/// The size of the buffer receiving a terminal device path.
const TTY_NAME_MAX: usize = 4096;

/// Returns the path to the terminal device open on the file descriptor `fd`.
///
/// The function fails if `fd` does not refer to a terminal, or if its name cannot be resolved.
pub fn ttyname(fd: RawFd) -> io::Result<OsString> {
    let mut buf = [0u8; TTY_NAME_MAX];
    let ret = unsafe { libc::ttyname_r(fd, buf.as_mut_ptr() as _, buf.len()) };
    if ret != 0 {
        return Err(io::Error::from_raw_os_error(ret));
    }
    let name = CStr::from_bytes_until_nul(&buf)
        .map_err(|_| io::Error::from(io::ErrorKind::InvalidData))?;
    Ok(OsString::from_vec(name.to_bytes().to_vec()))
}

/// Returns the name of the user logged in on the controlling terminal of the process.
///
/// The result depends on the session the process runs in. Processes started outside of a login
/// session, such as daemons or sandboxed builds, usually get an error.
pub fn getlogin() -> io::Result<OsString> {
    // The returned pointer is only valid until the next call, copy it right away
    unsafe {
        let ptr = libc::getlogin();
        if ptr.is_null() {
            return Err(io::Error::last_os_error());
        }
        let name = CStr::from_ptr(ptr).to_bytes().to_vec();
        Ok(OsString::from_vec(name))
    }
}
