//! Compile-and-run of a technique's demo snippet.
//!
//! A run writes the snippet to a scratch source file, compiles it with the
//! standard picked by [`select_standard`], and either prints the compiler's
//! diagnostics or runs the produced executable on the user's console. The
//! scratch files are removed before [`DemoRunner::run`] returns.
//!
//! Steps are strictly sequential: the compiler is awaited, then the program.

pub mod process;
pub mod scratch;
pub mod standard;

pub use process::{ProcessOutput, ProcessRunner, StdioMode, SystemRunner};
pub use scratch::ScratchFiles;
pub use standard::{select_standard, Standard};

use crate::catalog::Technique;
use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

pub const DEFAULT_COMPILER: &str = "g++";

pub const COMPILE_ERROR_HEADER: &str = "[Compilation Error]";
pub const PROGRAM_OUTPUT_HEADER: &str = "[Program Output]";

/// What happened during a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoOutcome {
    /// The compiler failed (or could not be started); nothing was run
    CompileFailed { diagnostics: String },
    /// The program was compiled and executed. Its exit status is not inspected.
    Ran { standard: Standard },
}

pub struct DemoRunner<R: ProcessRunner = SystemRunner> {
    compiler: String,
    workdir: PathBuf,
    runner: R,
}

impl DemoRunner<SystemRunner> {
    pub fn new(compiler: impl Into<String>) -> Self {
        DemoRunner::with_runner(compiler, PathBuf::from("."), SystemRunner)
    }
}

impl<R: ProcessRunner> DemoRunner<R> {
    pub fn with_runner(compiler: impl Into<String>, workdir: PathBuf, runner: R) -> Self {
        DemoRunner {
            compiler: compiler.into(),
            workdir,
            runner,
        }
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Compile and run the technique's demo, then wait for Enter on `input`.
    pub fn run(
        &mut self,
        tech: &Technique,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> io::Result<DemoOutcome> {
        writeln!(out, "Compiling and running demo...")?;
        out.flush()?;

        let outcome = self.compile_and_run(tech, out)?;

        write!(out, "\nPress Enter to continue...")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;

        Ok(outcome)
    }

    /// Steps 1-6 of a run, without the final acknowledgement.
    pub fn compile_and_run(&mut self, tech: &Technique, out: &mut dyn Write) -> io::Result<DemoOutcome> {
        // Removes the scratch files when dropped
        let scratch = ScratchFiles::new(&self.workdir);

        let standard = select_standard(&tech.demo_code);
        info!(technique = %tech.name, %standard, compiler = %self.compiler, "compiling demo");

        if let Err(e) = scratch.write_source(&tech.demo_code) {
            let diagnostics = format!("cannot write {}: {}", scratch.source.display(), e);
            return report_compile_failure(out, diagnostics);
        }

        let args: Vec<OsString> = vec![
            standard.flag().into(),
            scratch.source.clone().into_os_string(),
            "-o".into(),
            scratch.executable.clone().into_os_string(),
        ];

        let compiled = match self
            .runner
            .run(OsStr::new(&self.compiler), &args, StdioMode::Capture)
        {
            Ok(output) => {
                // The failure report is read back from this file
                if let Err(e) = scratch.write_diagnostics(&output.stderr) {
                    debug!(error = %e, "failed to write diagnostics file");
                }
                output.success()
            }
            Err(e) => {
                let message = format!("failed to start compiler '{}': {}", self.compiler, e);
                if let Err(e) = scratch.write_diagnostics(message.as_bytes()) {
                    debug!(error = %e, "failed to write diagnostics file");
                }
                false
            }
        };

        if !compiled {
            let diagnostics = scratch.read_diagnostics().unwrap_or_default();
            return report_compile_failure(out, diagnostics);
        }

        writeln!(out, "{}", PROGRAM_OUTPUT_HEADER)?;
        out.flush()?;
        match self
            .runner
            .run(scratch.executable.as_os_str(), &[], StdioMode::Inherit)
        {
            Ok(output) => debug!(exit_code = ?output.exit_code, "demo program finished"),
            Err(e) => writeln!(out, "failed to run demo program: {}", e)?,
        }

        Ok(DemoOutcome::Ran { standard })
    }
}

fn report_compile_failure(out: &mut dyn Write, diagnostics: String) -> io::Result<DemoOutcome> {
    info!("demo failed to compile");
    writeln!(out, "{}", COMPILE_ERROR_HEADER)?;
    writeln!(out, "{}", diagnostics)?;
    Ok(DemoOutcome::CompileFailed { diagnostics })
}
