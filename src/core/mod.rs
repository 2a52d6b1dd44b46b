//! Core building blocks: run options, the line processor and its per-line
//! extension point, and the run timestamp.
pub mod options;
pub mod processor;
pub mod timestamp;
