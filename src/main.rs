// cpptty: Modern C++ technique explorer

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cpptty::catalog::Catalog;
use cpptty::config::Config;
use cpptty::demo::DemoRunner;
use cpptty::explorer::Explorer;
use cpptty::ui::{tty, App};

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(e) = init_logging(config.log_file.as_deref(), config.list) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let catalog = match Catalog::locate(&config.candidates()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = if config.list {
        print_list(&catalog)
    } else {
        run_tui(catalog, &config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to `--log-file` when given. Without it they go to stderr in list
/// mode and nowhere while the TUI owns the screen.
fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file '{}'", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init();
    }
    Ok(())
}

fn print_list(catalog: &Catalog) -> Result<()> {
    let mut out = io::stdout().lock();
    for (i, tech) in catalog.techniques().iter().enumerate() {
        if tech.cpp_version.is_empty() {
            writeln!(out, "{}. {}", i + 1, tech.name)?;
        } else {
            writeln!(out, "{}. {} ({})", i + 1, tech.name, tech.cpp_version)?;
        }
    }
    Ok(())
}

fn run_tui(catalog: Catalog, config: &Config) -> Result<()> {
    let mut terminal = tty::setup().context("failed to set up terminal")?;

    let mut app = App::new(Explorer::new(catalog), DemoRunner::new(config.compiler.clone()));
    let res = app.run(&mut terminal);

    tty::restore(&mut terminal).context("failed to restore terminal")?;
    res.context("terminal UI failed")
}
