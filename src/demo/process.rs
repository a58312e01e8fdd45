//! Narrow process-execution capability
//!
//! The demo runner only needs "run this program with these arguments and tell
//! me how it went". [`SystemRunner`] does that with `std::process`; tests
//! substitute a fake.

use std::ffi::{OsStr, OsString};
use std::io;
use std::process::{Command, Stdio};

/// How the child's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Collect stdout/stderr into [`ProcessOutput`]
    Capture,
    /// Share the parent's console; output streams live to the user
    Inherit,
}

/// Result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the child was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub trait ProcessRunner {
    /// Run `program` to completion.
    fn run(
        &mut self,
        program: &OsStr,
        args: &[OsString],
        mode: StdioMode,
    ) -> io::Result<ProcessOutput>;
}

/// Runs real child processes, blocking until each exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(
        &mut self,
        program: &OsStr,
        args: &[OsString],
        mode: StdioMode,
    ) -> io::Result<ProcessOutput> {
        let mut command = Command::new(program);
        command.args(args);

        match mode {
            StdioMode::Capture => {
                let output = command.stdin(Stdio::null()).output()?;
                Ok(ProcessOutput {
                    exit_code: output.status.code(),
                    stdout: output.stdout,
                    stderr: output.stderr,
                })
            }
            StdioMode::Inherit => {
                let status = command.status()?;
                Ok(ProcessOutput {
                    exit_code: status.code(),
                    ..Default::default()
                })
            }
        }
    }
}
