//! # Introduction
//!
//! cpptty is a terminal reference for modern C++ (C++17/20/23) techniques.
//! It loads a JSON catalog of techniques, shows each one as a formatted page,
//! and can compile and run a technique's demo snippet with the system C++
//! compiler.
//!
//! ## Pipeline
//!
//! ```text
//! techniques.json → Loader → Catalog → Explorer state machine → TUI
//!                                                 └→ DemoRunner → g++ → demo
//! ```
//!
//! 1. [`catalog`] — flattens the nested document into ordered
//!    [`catalog::Technique`] records.
//! 2. [`explorer`] — the menu/detail state machine and detail layout,
//!    independent of the terminal.
//! 3. [`demo`] — scratch files, standard-flag selection, and the compiler /
//!    program subprocesses behind [`demo::ProcessRunner`].
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 5. [`config`] — command-line options.

pub mod catalog;
pub mod config;
pub mod demo;
pub mod explorer;
pub mod ui;
