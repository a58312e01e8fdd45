//! Scratch artifacts of a single demo run

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SOURCE_FILE: &str = "demo_temp.cpp";
pub const EXECUTABLE_FILE: &str = "demo_temp.out";
pub const DIAGNOSTICS_FILE: &str = "demo_temp.err";

/// The three fixed-name scratch files. Dropping the value deletes them.
///
/// Names are fixed, so two runs sharing a directory will clobber each other.
#[derive(Debug)]
pub struct ScratchFiles {
    pub source: PathBuf,
    pub executable: PathBuf,
    pub diagnostics: PathBuf,
}

impl ScratchFiles {
    pub fn new(dir: &Path) -> Self {
        ScratchFiles {
            source: dir.join(SOURCE_FILE),
            executable: dir.join(EXECUTABLE_FILE),
            diagnostics: dir.join(DIAGNOSTICS_FILE),
        }
    }

    /// Write the snippet to the source file; the handle is closed on return.
    pub fn write_source(&self, code: &str) -> io::Result<()> {
        fs::write(&self.source, code)
    }

    pub fn write_diagnostics(&self, text: &[u8]) -> io::Result<()> {
        fs::write(&self.diagnostics, text)
    }

    pub fn read_diagnostics(&self) -> io::Result<String> {
        let bytes = fs::read(&self.diagnostics)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Best-effort removal of all three files.
    pub fn remove_all(&self) {
        for path in [&self.source, &self.executable, &self.diagnostics] {
            if let Err(e) = fs::remove_file(path) {
                if e.kind() != io::ErrorKind::NotFound {
                    debug!(path = %path.display(), error = %e, "failed to remove scratch file");
                }
            }
        }
    }
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        self.remove_all();
    }
}
