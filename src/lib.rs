#![warn(clippy::pedantic)]

use std::{fmt::Display, io, path::PathBuf};

pub mod cli;
pub mod report;

pub use dimensions_shapes as shapes;

#[derive(Debug)]
pub enum Error {
    /// Writing the report itself failed.
    Output(io::Error),
    /// Writing an auxiliary file (log, markdown help) failed.
    File { path: PathBuf, source: io::Error },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Output(err) => write!(f, "failed to write output: {err}"),
            Self::File { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output(err) | Self::File { source: err, .. } => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}
