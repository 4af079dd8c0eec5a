use std::ffi::{CStr, OsStr};
use std::fs::OpenOptions;
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const MESSAGE: &[u8] = b"This account is currently not available.\n";

fn run_nologin_with(stdin: Stdio, arg0: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nologin"));
    if let Some(arg0) = arg0 {
        cmd.arg0(arg0);
    }
    cmd.args(args).stdin(stdin).output().expect("run nologin")
}

fn run_nologin(arg0: Option<&str>, args: &[&str]) -> Output {
    // No terminal attached
    run_nologin_with(Stdio::null(), arg0, args)
}

fn assert_denied(output: &Output) {
    assert_eq!(output.stdout, MESSAGE);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}

/// Opens a pseudo-terminal, returning its master side and the path to its slave side.
fn open_pty() -> (OwnedFd, PathBuf) {
    unsafe {
        let master = libc::posix_openpt(libc::O_RDWR | libc::O_NOCTTY);
        assert!(master >= 0, "{}", io::Error::last_os_error());
        let master = OwnedFd::from_raw_fd(master);
        assert_eq!(libc::grantpt(master.as_raw_fd()), 0);
        assert_eq!(libc::unlockpt(master.as_raw_fd()), 0);
        let path = libc::ptsname(master.as_raw_fd());
        assert!(!path.is_null());
        let path = OsStr::from_bytes(CStr::from_ptr(path).to_bytes());
        (master, PathBuf::from(path))
    }
}

#[test]
fn no_arguments() {
    assert_denied(&run_nologin(None, &[]));
}

#[test]
fn arguments_ignored() {
    assert_denied(&run_nologin(None, &["-x", "foo"]));
    assert_denied(&run_nologin(None, &["--help"]));
    assert_denied(&run_nologin(None, &["-c", "/bin/sh -i"]));
    assert_denied(&run_nologin(None, &["", "\u{7f}", "--"]));
}

#[test]
fn login_shell_name() {
    assert_denied(&run_nologin(Some("-nologin"), &[]));
    assert_denied(&run_nologin(Some("/sbin/nologin"), &["-x", "foo"]));
}

#[test]
fn terminal_attached() {
    // The master side must stay open while the command runs
    let (_master, path) = open_pty();
    let slave = OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_NOCTTY)
        .open(&path)
        .expect("open pty slave");
    let with_terminal = run_nologin_with(Stdio::from(slave), None, &[]);
    assert_denied(&with_terminal);
    assert_eq!(with_terminal.stdout, run_nologin(None, &[]).stdout);
}

#[test]
fn repeated_invocations() {
    let first = run_nologin(None, &[]);
    for _ in 0..3 {
        let output = run_nologin(None, &[]);
        assert_denied(&output);
        assert_eq!(output.stdout, first.stdout);
    }
}
