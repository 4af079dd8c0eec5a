//! Main of the `nologin` command.
//!
//! The command is meant to be set as the login shell of disabled accounts. Arguments are ignored.

mod nologin;

fn main() {
    nologin::main();
}
