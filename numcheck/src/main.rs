//! numcheck CLI binary.
//!
//! Entry point for `numcheck <number>`. The first character written to
//! stdout is `1` if and only if the number is on the allow-list.

use std::io;
use std::process::ExitCode;

use numcheck::exit::codes;
use numcheck::{emit, execute};
use numcheck_clock::SystemClock;
use numcheck_fs::RealFilesystem;

fn main() -> ExitCode {
    let invocation = execute(std::env::args_os(), &RealFilesystem, &SystemClock);

    let mut stdout = io::stdout().lock();
    if let Err(e) = emit(&mut stdout, &invocation.verdict) {
        eprintln!("numcheck: failed to write verdict: {e}");
        return ExitCode::from(codes::IO_ERROR);
    }

    ExitCode::from(invocation.exit_code)
}
