//! Command-line configuration

use crate::catalog::DEFAULT_CANDIDATES;
use crate::demo::DEFAULT_COMPILER;
use clap::Parser;
use std::path::PathBuf;

/// Browse modern C++ techniques and run their demos.
#[derive(Debug, Clone, Parser)]
#[command(name = "cpptty")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Technique document to load (tried before the default locations).
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// C++ compiler used to build demos.
    #[arg(long, env = "CPPTTY_CXX", default_value = DEFAULT_COMPILER)]
    pub compiler: String,

    /// Write logs to this file (the TUI owns the terminal, so logs are
    /// discarded otherwise).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the numbered technique list and exit.
    #[arg(long)]
    pub list: bool,
}

impl Config {
    /// Document paths in the order they are tried
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.catalog
            .iter()
            .cloned()
            .chain(DEFAULT_CANDIDATES.iter().map(|p| PathBuf::from(*p)))
            .collect()
    }
}
