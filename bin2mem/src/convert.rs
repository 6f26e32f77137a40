//! Word-by-word conversion from a byte stream to hex lines.

use std::{
    io::{self, Read, Write},
    num::NonZeroUsize,
};

use log::trace;

use crate::error::StreamError;
use crate::types::{ByteOrder, Summary};
use crate::{HEX_DIGITS_PER_BYTE, LINE_TERMINATOR};

/// Encode one word as zero-padded lowercase hex, without a line terminator.
///
/// The result is left-padded with `0` to `2 * word_width` digits, so a short
/// final word still yields a full-width line. Words longer than `word_width`
/// are encoded in full.
pub fn encode_word(word: &[u8], word_width: NonZeroUsize, byte_order: ByteOrder) -> String {
    let mut word = word.to_vec();
    if byte_order == ByteOrder::Swapped {
        word.reverse();
    }
    let encoded = hex::encode(&word);
    let width = word_width.get() * HEX_DIGITS_PER_BYTE;
    format!("{encoded:0>width$}")
}

/// Append the zero-padded hex digits of `word` to `line`, in the given order.
fn encode_into(
    line: &mut Vec<u8>,
    word: &[u8],
    word_width: NonZeroUsize,
) -> Result<(), hex::FromHexError> {
    let digits = word.len() * HEX_DIGITS_PER_BYTE;
    let pad = (word_width.get() * HEX_DIGITS_PER_BYTE).saturating_sub(digits);
    let start = line.len() + pad;
    line.resize(start + digits, b'0');
    hex::encode_to_slice(word, &mut line[start..])
}

/// Number of lines produced for an input of `byte_len` bytes.
pub fn line_count(byte_len: u64, word_width: NonZeroUsize) -> u64 {
    byte_len.div_ceil(word_width.get() as u64)
}

/// Fill `buf` from `reader`, stopping early only at end of stream.
fn read_word<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Convert every word of `reader` into one hex line on `writer`.
///
/// Words are consecutive, non-overlapping groups of `word_width` bytes taken
/// in stream order; only the last one may be shorter. The writer is flushed
/// before returning.
pub fn convert<R, W>(
    reader: &mut R,
    writer: &mut W,
    word_width: NonZeroUsize,
    byte_order: ByteOrder,
) -> Result<Summary, StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut summary = Summary::default();
    let mut word = vec![0u8; word_width.get()];
    let mut line = Vec::with_capacity(word_width.get() * HEX_DIGITS_PER_BYTE + 1);

    loop {
        let len = read_word(reader, &mut word).map_err(StreamError::Read)?;
        if len == 0 {
            break;
        }

        let bytes = &mut word[..len];
        if byte_order == ByteOrder::Swapped {
            bytes.reverse();
        }
        line.clear();
        encode_into(&mut line, bytes, word_width)
            .map_err(|e| StreamError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        line.push(LINE_TERMINATOR);
        writer.write_all(&line).map_err(StreamError::Write)?;

        summary.words += 1;
        summary.bytes += len as u64;
        trace!("word {} encoded from {len} bytes", summary.words);
    }

    writer.flush().map_err(StreamError::Write)?;
    Ok(summary)
}
