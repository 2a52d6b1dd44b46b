use std::io::{BufRead, BufReader, Cursor};

use bzip2_rs::DecoderReader as Bz2DecoderReader;
use flate2::bufread::MultiGzDecoder;

use super::source::InputSource;
use crate::error::{Error, Result};

/// Wrap `reader` in a decompressor chosen by the source's extension.
///
/// `gz` and `bz2` are decoded lazily. `xz` is decoded up front into memory,
/// `lzma_rs` has no streaming reader. Anything else passes through untouched.
pub fn decompress(source: &InputSource, mut reader: Box<dyn BufRead>) -> Result<Box<dyn BufRead>> {
    match source.extension() {
        Some("gz") => {
            tracing::debug!(source = %source, "Decompressing gzip input");
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
        }
        Some("bz2") => {
            tracing::debug!(source = %source, "Decompressing bzip2 input");
            Ok(Box::new(BufReader::new(Bz2DecoderReader::new(reader))))
        }
        Some("xz") => {
            tracing::debug!(source = %source, "Decompressing xz input");
            let mut decoded = Vec::new();
            lzma_rs::xz_decompress(&mut reader, &mut decoded).map_err(|e| match e {
                lzma_rs::error::Error::IoError(io) => Error::Io(io),
                other => Error::Decompress {
                    codec: "xz",
                    message: other.to_string(),
                },
            })?;
            Ok(Box::new(Cursor::new(decoded)))
        }
        _ => Ok(reader),
    }
}

/// `printf 'hello\nworld\n' | bzip2`
#[cfg(test)]
pub(crate) const HELLO_WORLD_BZ2: &[u8] = &[
    0x42, 0x5a, 0x68, 0x39, 0x31, 0x41, 0x59, 0x26, 0x53, 0x59, 0x6b, 0x5f, 0xb1, 0xdd, 0x00, 0x00,
    0x02, 0x41, 0x80, 0x00, 0x10, 0x06, 0x44, 0x90, 0x80, 0x20, 0x00, 0x31, 0x0c, 0x08, 0x21, 0xa3,
    0x69, 0x08, 0x07, 0x23, 0xae, 0x87, 0x8b, 0xb9, 0x22, 0x9c, 0x28, 0x48, 0x35, 0xaf, 0xd8, 0xee,
    0x80,
];
