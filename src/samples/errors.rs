use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamplesError {
    #[error("failed to open the samples file `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line} of the samples file: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("line {line} of the samples file is not a valid sample: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line} of the samples file is rejected: {reason}")]
    Invalid { line: usize, reason: &'static str },
    #[error("the samples file contains no samples")]
    Empty,
}
