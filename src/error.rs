use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown scheduling policy `{0}` (expected FCFS, SSTF, SCAN or CLOOK)")]
    UnknownPolicy(String),
    #[error("Trace line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("Trace line {line}: arrival time {arrival} precedes previous arrival {previous}")]
    UnsortedTrace { line: usize, arrival: f64, previous: f64 },
    #[error("Failed to read trace {}: {source}", .path.display())]
    ReadTrace { path: PathBuf, source: io::Error },
    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    #[error("Failed to write results: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
