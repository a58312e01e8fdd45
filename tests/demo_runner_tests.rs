// Demo runner tests with a fake process runner

use cpptty::catalog::Technique;
use cpptty::demo::scratch::{DIAGNOSTICS_FILE, EXECUTABLE_FILE, SOURCE_FILE};
use cpptty::demo::{
    DemoOutcome, DemoRunner, ProcessOutput, ProcessRunner, Standard, StdioMode,
    COMPILE_ERROR_HEADER, PROGRAM_OUTPUT_HEADER,
};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

/// Records invocations. The compiler "succeeds" by creating the output file.
struct FakeRunner {
    compile_ok: bool,
    spawn_fails: bool,
    diagnostics: &'static str,
    calls: Vec<(String, Vec<String>, StdioMode)>,
    source_seen: Option<String>,
}

impl FakeRunner {
    fn compiling(ok: bool) -> Self {
        FakeRunner {
            compile_ok: ok,
            spawn_fails: false,
            diagnostics: "demo_temp.cpp:1:1: error: expected ';' before '}' token",
            calls: Vec::new(),
            source_seen: None,
        }
    }
}

impl ProcessRunner for FakeRunner {
    fn run(
        &mut self,
        program: &OsStr,
        args: &[OsString],
        mode: StdioMode,
    ) -> io::Result<ProcessOutput> {
        let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        self.calls
            .push((program.to_string_lossy().into_owned(), args.clone(), mode));

        if mode == StdioMode::Inherit {
            return Ok(ProcessOutput {
                exit_code: Some(3),
                ..Default::default()
            });
        }
        if self.spawn_fails {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such compiler"));
        }

        self.source_seen = fs::read_to_string(&args[1]).ok();
        if self.compile_ok {
            fs::write(&args[3], b"\x7fELF").unwrap();
            Ok(ProcessOutput {
                exit_code: Some(0),
                ..Default::default()
            })
        } else {
            Ok(ProcessOutput {
                exit_code: Some(1),
                stderr: self.diagnostics.as_bytes().to_vec(),
                ..Default::default()
            })
        }
    }
}

fn technique(code: &str) -> Technique {
    let mut tech = Technique::new("Demo");
    tech.demo_code = code.to_string();
    tech
}

fn assert_scratch_gone(dir: &Path) {
    for name in [SOURCE_FILE, EXECUTABLE_FILE, DIAGNOSTICS_FILE] {
        assert!(!dir.join(name).exists(), "{} left behind", name);
    }
}

fn run(
    runner: FakeRunner,
    dir: PathBuf,
    code: &str,
) -> (DemoOutcome, String, DemoRunner<FakeRunner>) {
    let mut demo = DemoRunner::with_runner("g++", dir, runner);
    let mut input = Cursor::new(b"\n".to_vec());
    let mut out = Vec::new();
    let outcome = demo.run(&technique(code), &mut input, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap(), demo)
}

#[test]
fn test_successful_compile_runs_program() {
    let dir = tempfile::tempdir().unwrap();
    let code = "#include <concepts>\ntemplate<typename T> concept C = true;\nint main() {}";
    let (outcome, output, demo) = run(FakeRunner::compiling(true), dir.path().to_path_buf(), code);

    assert_eq!(
        outcome,
        DemoOutcome::Ran {
            standard: Standard::Cpp20
        }
    );
    assert!(output.contains(PROGRAM_OUTPUT_HEADER));
    assert!(!output.contains(COMPILE_ERROR_HEADER));
    assert!(output.contains("Press Enter to continue..."));

    let calls = &demo.runner().calls;
    assert_eq!(calls.len(), 2);

    let (compiler, args, mode) = &calls[0];
    assert_eq!(compiler, "g++");
    assert_eq!(args[0], "-std=c++20");
    assert!(args[1].ends_with(SOURCE_FILE));
    assert_eq!(args[2], "-o");
    assert!(args[3].ends_with(EXECUTABLE_FILE));
    assert_eq!(*mode, StdioMode::Capture);

    let (program, args, mode) = &calls[1];
    assert!(program.ends_with(EXECUTABLE_FILE));
    assert!(args.is_empty());
    assert_eq!(*mode, StdioMode::Inherit);

    assert_eq!(demo.runner().source_seen.as_deref(), Some(code));
    assert_scratch_gone(dir.path());
}

#[test]
fn test_compile_failure_shows_diagnostics_and_skips_run() {
    let dir = tempfile::tempdir().unwrap();
    let (outcome, output, demo) = run(
        FakeRunner::compiling(false),
        dir.path().to_path_buf(),
        "int main() { return 0 }",
    );

    match &outcome {
        DemoOutcome::CompileFailed { diagnostics } => {
            assert!(!diagnostics.is_empty());
            assert!(diagnostics.contains("expected ';'"));
        }
        other => panic!("expected compile failure, got {:?}", other),
    }
    assert!(output.contains(COMPILE_ERROR_HEADER));
    assert!(output.contains("expected ';'"));
    assert!(!output.contains(PROGRAM_OUTPUT_HEADER));

    assert_eq!(demo.runner().calls.len(), 1);
    assert_scratch_gone(dir.path());
}

#[test]
fn test_missing_compiler_is_reported_as_compile_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut runner = FakeRunner::compiling(true);
    runner.spawn_fails = true;
    let (outcome, output, demo) = run(runner, dir.path().to_path_buf(), "int main() {}");

    assert!(matches!(outcome, DemoOutcome::CompileFailed { ref diagnostics } if diagnostics.contains("no such compiler")));
    assert!(!output.contains(PROGRAM_OUTPUT_HEADER));
    assert_eq!(demo.runner().calls.len(), 1);
    assert_scratch_gone(dir.path());
}

#[test]
fn test_flag_follows_newest_marker() {
    let dir = tempfile::tempdir().unwrap();
    let code = "#include <expected>\ntemplate<typename T> concept C = true;";
    let (_, _, demo) = run(FakeRunner::compiling(true), dir.path().to_path_buf(), code);
    assert_eq!(demo.runner().calls[0].1[0], "-std=c++23");

    let (_, _, demo) = run(
        FakeRunner::compiling(true),
        dir.path().to_path_buf(),
        "int main() { return 0; }",
    );
    assert_eq!(demo.runner().calls[0].1[0], "-std=c++17");
}

#[test]
fn test_unwritable_workdir_still_returns() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let (outcome, output, demo) = run(FakeRunner::compiling(true), missing, "int main() {}");

    assert!(matches!(outcome, DemoOutcome::CompileFailed { .. }));
    assert!(output.contains(COMPILE_ERROR_HEADER));
    assert!(demo.runner().calls.is_empty());
}
