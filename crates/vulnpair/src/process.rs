// SPDX-License-Identifier: Apache-2.0

//! External-process invocation pair: argument vector vs. shell string.
//!
//! The runner is a trait so the harness can assert the invocation boundary
//! (what crossed into the process facility, and in which shape) without
//! executing anything real. [`SystemRunner`] is the real facility: the
//! vector form goes straight to `std::process::Command`, the shell form is
//! handed to `sh -c`.

use std::io;
use std::process::{Command, Stdio};

/// Fixed program invoked by both halves of the pair.
const GIT_PROGRAM: &str = "git";

/// Process-execution boundary.
pub trait ProcessRunner {
    /// Runs `program` with `args` as an explicit argument vector, output
    /// suppressed, waiting for completion. No shell is interposed.
    fn run_argv(&self, program: &str, args: &[&str]) -> io::Result<()>;

    /// Submits a fully-assembled command line to a shell, fire-and-forget.
    /// The outcome is never observed.
    fn run_shell(&self, command_line: &str);
}

/// Runner backed by real OS processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Creates the system runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run_argv(&self, program: &str, args: &[&str]) -> io::Result<()> {
        tracing::debug!(%program, ?args, "running program with argument vector");
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|_| ())
    }

    fn run_shell(&self, command_line: &str) {
        tracing::debug!(%command_line, "submitting command line to shell");
        // Spawned asynchronously; the child and its outcome are discarded.
        let _ = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}

/// Shows a commit by passing `reference` as one argv element to a fixed
/// program. Shell metacharacters in `reference` stay a single opaque
/// argument; execution failures are swallowed.
pub fn show_commit_safe<R: ProcessRunner + ?Sized>(runner: &R, reference: &str) {
    let _ = runner.run_argv(GIT_PROGRAM, &["show", reference]);
}

/// Shows a commit by concatenating `reference` into a shell command line.
/// Any shell metacharacter in `reference` executes.
pub fn show_commit_unsafe<R: ProcessRunner + ?Sized>(runner: &R, reference: &str) {
    runner.run_shell(&format!("{GIT_PROGRAM} show {reference}"));
}
