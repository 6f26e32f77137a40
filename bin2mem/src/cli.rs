//! Command-line argument parsing.

use std::{num::NonZeroUsize, path::PathBuf};

use bin2mem::{ByteOrder, Config};
use clap::Parser;

/// Convert a binary file into a hex memory-image file.
#[derive(Parser, Debug)]
#[command(name = "bin2mem", version)]
pub(crate) struct Args {
    /// Input binary file.
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Output hex file. Created or truncated.
    #[arg(long = "out", value_name = "PATH")]
    pub output: PathBuf,

    /// Output width of the hex file, in bytes per line.
    #[arg(long = "outw", value_name = "BYTES")]
    pub outw: NonZeroUsize,

    /// Keep the input byte order instead of swapping each word.
    #[arg(long)]
    pub no_swap: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let byte_order = if args.no_swap {
            ByteOrder::Preserved
        } else {
            ByteOrder::Swapped
        };
        Config::new(args.input, args.output, args.outw).with_byte_order(byte_order)
    }
}
