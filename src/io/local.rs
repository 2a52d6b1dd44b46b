use std::fs::File;
use std::io::{BufRead, BufReader};

use super::source::InputSource;
use super::transport::Transport;
use crate::error::{Error, Result};

/// Reads local files and standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTransport;

impl Transport for LocalTransport {
    fn name(&self) -> &'static str {
        "local"
    }

    fn open(&self, source: &InputSource) -> Result<Box<dyn BufRead>> {
        match source {
            InputSource::Stdin => Ok(Box::new(std::io::stdin().lock())),
            InputSource::Local(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
            InputSource::S3 { .. } => Err(Error::UnsupportedScheme {
                scheme: "s3".to_string(),
                uri: source.to_string(),
            }),
        }
    }
}
