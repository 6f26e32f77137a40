//! Conversion of binary files into hexadecimal memory images.
//!
//! # Output Format
//!
//! The input is read as a flat byte stream and cut into consecutive,
//! non-overlapping words of `word_width` bytes. Each word becomes one line:
//!
//! ```text
//! [HEX: 2 * word_width lowercase digits]\n
//! ```
//!
//! - Bytes within a word are reversed before encoding (unless
//!   [`ByteOrder::Preserved`] is selected), so a little-endian word stored as
//!   `01 02 03 04` is written as `04030201`.
//! - When the input length is not a multiple of the word width, the final
//!   word is encoded from the bytes available and left-padded with `0` to the
//!   full line width.
//!
//! The resulting file can be loaded with `$readmemh`-style memory
//! initializers.

mod convert;
mod error;
mod file;
mod types;

pub use convert::{convert, encode_word, line_count};
pub use error::{ConvertError, StreamError};
pub use file::convert_file;
pub use types::{ByteOrder, Config, Summary};

/// Number of hex digits used to encode a single byte.
pub const HEX_DIGITS_PER_BYTE: usize = 2;

/// Line terminator written after every word.
pub const LINE_TERMINATOR: u8 = b'\n';
