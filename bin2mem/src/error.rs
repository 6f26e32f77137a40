//! Error types for conversion operations.

use std::{io, path::PathBuf};

/// Error raised by [`crate::convert`] while moving words between streams.
///
/// Read and write failures are kept apart so that callers holding the file
/// paths can report which side failed.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Reading from the byte source failed.
    #[error("read failed")]
    Read(#[source] io::Error),
    /// Writing to the text sink failed.
    #[error("write failed")]
    Write(#[source] io::Error),
}

/// Error type for file-level conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input path did not exist when the conversion started.
    #[error("input file '{}' does not exist", .path.display())]
    InputNotFound { path: PathBuf },
    /// The input exists but could not be opened for reading.
    #[error("failed to open input file '{}'", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output could not be created or truncated.
    #[error("failed to create output file '{}'", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading the input failed mid-conversion.
    #[error("failed to read input file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing the output failed mid-conversion.
    #[error("failed to write output file '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
