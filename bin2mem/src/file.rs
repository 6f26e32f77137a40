//! File-level conversion: existence check, scoped open and create.

use std::{
    fs::{File, symlink_metadata},
    io::{BufReader, BufWriter},
};

use log::{debug, info, warn};

use crate::convert::{convert, line_count};
use crate::error::{ConvertError, StreamError};
use crate::types::{Config, Summary};

/// Convert the input file named by `config` into a hex memory image.
///
/// The input must exist before anything else happens; when it does not, the
/// output file is left untouched. Both files are closed on every exit path.
/// A failure after the output was created leaves it partially written.
pub fn convert_file(config: &Config) -> Result<Summary, ConvertError> {
    let input_path = &config.input_path;
    let output_path = &config.output_path;

    // a dangling symlink passes here and fails on open
    if symlink_metadata(input_path).is_err() {
        return Err(ConvertError::InputNotFound {
            path: input_path.clone(),
        });
    }

    info!(
        "Converting '{}' into '{}' with {}-byte words ({} byte order)",
        input_path.display(),
        output_path.display(),
        config.word_width,
        config.byte_order
    );

    let input = File::open(input_path).map_err(|source| ConvertError::OpenInput {
        path: input_path.clone(),
        source,
    })?;
    if let Ok(metadata) = input.metadata() {
        let len = metadata.len();
        debug!(
            "Opened input '{}' ({len} bytes, {} lines expected)",
            input_path.display(),
            line_count(len, config.word_width)
        );
        if len % config.word_width.get() as u64 != 0 {
            warn!(
                "Input length {len} is not a multiple of {}; the last word will be zero-padded",
                config.word_width
            );
        }
    }

    let output = File::create(output_path).map_err(|source| ConvertError::CreateOutput {
        path: output_path.clone(),
        source,
    })?;
    debug!("Created output '{}'", output_path.display());

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let summary = convert(
        &mut reader,
        &mut writer,
        config.word_width,
        config.byte_order,
    )
    .map_err(|e| match e {
        StreamError::Read(source) => ConvertError::Read {
            path: input_path.clone(),
            source,
        },
        StreamError::Write(source) => ConvertError::Write {
            path: output_path.clone(),
            source,
        },
    })?;

    info!(
        "Wrote {} words from {} bytes to '{}'",
        summary.words,
        summary.bytes,
        output_path.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::{fs, num::NonZeroUsize};

    use tempfile::TempDir;

    use super::*;
    use crate::types::ByteOrder;

    fn width(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_convert_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("image.bin");
        let output = dir.path().join("image.hex");
        fs::write(&input, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]).unwrap();

        let summary = convert_file(&Config::new(&input, &output, width(4))).unwrap();

        assert_eq!(summary, Summary { words: 2, bytes: 8 });
        assert_eq!(fs::read_to_string(&output).unwrap(), "04030201\n08070605\n");
    }

    #[test]
    fn test_convert_file_truncates_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("image.bin");
        let output = dir.path().join("image.hex");
        fs::write(&input, [0xaa, 0xbb]).unwrap();
        fs::write(&output, "stale contents that are longer than the result\n").unwrap();

        let config = Config::new(&input, &output, width(2)).with_byte_order(ByteOrder::Preserved);
        convert_file(&config).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "aabb\n");
    }

    #[test]
    fn test_missing_input_leaves_output_alone() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("no.such.bin");
        let output = dir.path().join("image.hex");

        let err = convert_file(&Config::new(&input, &output, width(4))).unwrap_err();

        assert!(matches!(err, ConvertError::InputNotFound { ref path } if *path == input));
        assert!(!output.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_passes_existence_check() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("image.bin");
        std::os::unix::fs::symlink(dir.path().join("no.such.target"), &input).unwrap();
        let output = dir.path().join("image.hex");

        let err = convert_file(&Config::new(&input, &output, width(4))).unwrap_err();

        assert!(matches!(err, ConvertError::OpenInput { ref path, .. } if *path == input));
        assert!(!output.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_input() {
        // a directory opens fine on unix but fails on read
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("image_dir");
        fs::create_dir(&input).unwrap();
        let output = dir.path().join("image.hex");

        let err = convert_file(&Config::new(&input, &output, width(4))).unwrap_err();

        assert!(matches!(err, ConvertError::Read { ref path, .. } if *path == input));
    }

    #[test]
    fn test_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("image.bin");
        fs::write(&input, [0x00]).unwrap();
        let output = dir.path().join("missing_dir").join("image.hex");

        let err = convert_file(&Config::new(&input, &output, width(4))).unwrap_err();

        assert!(matches!(err, ConvertError::CreateOutput { .. }));
    }
}
