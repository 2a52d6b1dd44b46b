//! Uniform opening of local files, stdin and S3 objects.
//!
//! `Transports` plays the role of the transport-parameter resolver: given a
//! source it picks the `Transport` able to serve it. `open_text` then opens the
//! source, applies transparent decompression and yields its lines.
use std::io::BufRead;

use super::compression::decompress;
use super::lines::TextLines;
use super::local::LocalTransport;
use super::s3::S3Client;
use super::source::InputSource;
use crate::error::{Error, Result};

/// Capability to open a source as a buffered byte stream.
pub trait Transport {
    fn name(&self) -> &'static str;

    fn open(&self, source: &InputSource) -> Result<Box<dyn BufRead>>;
}

/// The transports available for this run.
#[derive(Debug, Default)]
pub struct Transports {
    local: LocalTransport,
    s3: Option<S3Client>,
}

impl Transports {
    pub fn new(s3: Option<S3Client>) -> Self {
        Self {
            local: LocalTransport,
            s3,
        }
    }

    pub fn s3_client(&self) -> Option<&S3Client> {
        self.s3.as_ref()
    }

    /// Pick the transport for `source`.
    pub fn get_transport_params(&self, source: &InputSource) -> Result<&dyn Transport> {
        match source {
            InputSource::Stdin | InputSource::Local(_) => Ok(&self.local as &dyn Transport),
            InputSource::S3 { .. } => match &self.s3 {
                Some(client) => Ok(client as &dyn Transport),
                None => Err(Error::MissingS3Config {
                    uri: source.to_string(),
                }),
            },
        }
    }

    /// Resolve, open and decompress `source`, returning its lines.
    pub fn open_text(&self, source: &InputSource) -> Result<TextLines<Box<dyn BufRead>>> {
        let transport = self.get_transport_params(source)?;
        tracing::debug!(source = %source, transport = transport.name(), "Opening input");
        let reader = transport.open(source)?;
        Ok(TextLines::new(decompress(source, reader)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn local_and_stdin_resolve_to_local_transport() {
        let transports = Transports::default();
        let local = InputSource::Local(PathBuf::from("x.txt"));
        assert_eq!(transports.get_transport_params(&local).unwrap().name(), "local");
        assert_eq!(
            transports.get_transport_params(&InputSource::Stdin).unwrap().name(),
            "local"
        );
    }

    #[test]
    fn s3_without_client_is_missing_config() {
        let transports = Transports::default();
        let source = InputSource::parse("s3://bucket/key.txt").unwrap();
        match transports.get_transport_params(&source) {
            Err(Error::MissingS3Config { uri }) => assert_eq!(uri, "s3://bucket/key.txt"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(t) => panic!("unexpected transport: {}", t.name()),
        }
    }

    #[test]
    fn open_text_reads_gzipped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"one\ntwo\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let lines: Vec<String> = Transports::default()
            .open_text(&InputSource::Local(path))
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["one\n", "two\n"]);
    }
}
