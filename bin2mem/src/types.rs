//! Type definitions for conversion settings and results.

use std::{fmt, num::NonZeroUsize, path::PathBuf};

/// Order in which the bytes of a word are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Reverse the bytes of every word before encoding.
    #[default]
    Swapped,
    /// Encode bytes in the order they appear in the input.
    Preserved,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Swapped => write!(f, "swapped"),
            ByteOrder::Preserved => write!(f, "preserved"),
        }
    }
}

/// Settings for a single file conversion.
///
/// The word width is non-zero by construction, so a `Config` that exists is
/// always valid to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Binary file to read.
    pub input_path: PathBuf,
    /// Hex file to create or truncate.
    pub output_path: PathBuf,
    /// Bytes per output line.
    pub word_width: NonZeroUsize,
    /// Byte order applied within each word.
    pub byte_order: ByteOrder,
}

impl Config {
    /// Create a config that swaps the byte order of every word.
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        word_width: NonZeroUsize,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            word_width,
            byte_order: ByteOrder::default(),
        }
    }

    /// Replace the byte order.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }
}

/// Totals reported after a successful conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of lines written.
    pub words: u64,
    /// Number of input bytes consumed.
    pub bytes: u64,
}
