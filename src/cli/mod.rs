//! Command line layer: argument parsing (`args`) and the orchestration that
//! wires options, logging and the line processor together (`runner`).
//!
//! To embed the processor in another program, use the `lineproc` library
//! directly instead of this module.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
