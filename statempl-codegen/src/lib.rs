//! Deterministic synthesis of the Go driver program.
//!
//! The driver is a single `package main` file that imports every package
//! owning a discovered component, invokes each component function in
//! discovery order, and writes the rendered bytes into the output tree.
//! It is regenerated from scratch on every run and executed with
//! `go run` by the orchestrator.

mod builder;
mod script;

pub use builder::CodeBuilder;
pub use script::{
    DriverScript, Error, GenerationMode, Result, SCRIPT_FILE_NAME, output_path,
};
