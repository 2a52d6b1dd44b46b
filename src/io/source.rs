use std::path::PathBuf;

use url::Url;

use crate::core::options::STDIN_SENTINEL;
use crate::error::{Error, Result};

/// Where a line stream comes from, parsed from a source identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Local(PathBuf),
    S3 { bucket: String, key: String },
}

impl InputSource {
    /// Classify an identifier by its scheme.
    ///
    /// `-` and `/dev/stdin` name standard input, `s3://bucket/key` an object,
    /// `file://` and scheme-less strings a local path. Other schemes are rejected.
    pub fn parse(identifier: &str) -> Result<Self> {
        if identifier.is_empty() {
            return Err(Error::InvalidSource(identifier.to_string()));
        }
        if identifier == STDIN_SENTINEL || identifier == "-" {
            return Ok(InputSource::Stdin);
        }
        // Only a well-formed scheme before "://" makes this a URI, so drive
        // letters (`C:\x`) and paths like "data/a://b" stay local
        match identifier.split_once("://") {
            Some((scheme, _)) if is_scheme(scheme) => {}
            _ => return Ok(InputSource::Local(PathBuf::from(identifier))),
        }

        let url = Url::parse(identifier).map_err(|_| Error::InvalidSource(identifier.to_string()))?;
        match url.scheme() {
            "s3" => {
                // Keys are taken verbatim; `Url::path` would percent-encode them
                let rest = identifier.split_once("://").map_or("", |(_, rest)| rest);
                let (bucket, key) = rest.split_once('/').unwrap_or((rest, ""));
                if bucket.is_empty() || key.is_empty() {
                    return Err(Error::InvalidSource(identifier.to_string()));
                }
                Ok(InputSource::S3 {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                })
            }
            "file" => url
                .to_file_path()
                .map(InputSource::Local)
                .map_err(|_| Error::InvalidSource(identifier.to_string())),
            other => Err(Error::UnsupportedScheme {
                scheme: other.to_string(),
                uri: identifier.to_string(),
            }),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, InputSource::S3 { .. })
    }

    /// File name used to pick a decompressor, when there is one.
    pub fn extension(&self) -> Option<&str> {
        let name = match self {
            InputSource::Stdin => return None,
            InputSource::Local(path) => path.file_name()?.to_str()?,
            InputSource::S3 { key, .. } => key.rsplit('/').next()?,
        };
        name.rsplit_once('.').map(|(_, ext)| ext)
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`.
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "{}", STDIN_SENTINEL),
            InputSource::Local(path) => write!(f, "{}", path.display()),
            InputSource::S3 { bucket, key } => write!(f, "s3://{}/{}", bucket, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdin_sentinels() {
        assert_eq!(InputSource::parse("/dev/stdin").unwrap(), InputSource::Stdin);
        assert_eq!(InputSource::parse("-").unwrap(), InputSource::Stdin);
    }

    #[test]
    fn plain_and_file_uri_paths_are_local() {
        assert_eq!(
            InputSource::parse("data/in.txt").unwrap(),
            InputSource::Local(PathBuf::from("data/in.txt"))
        );
        assert_eq!(
            InputSource::parse("file:///tmp/in.txt").unwrap(),
            InputSource::Local(PathBuf::from("/tmp/in.txt"))
        );
        assert_eq!(
            InputSource::parse("data/a://b.txt").unwrap(),
            InputSource::Local(PathBuf::from("data/a://b.txt"))
        );
    }

    #[test]
    fn file_uri_host_and_escapes_are_resolved() {
        assert_eq!(
            InputSource::parse("file://localhost/tmp/x").unwrap(),
            InputSource::Local(PathBuf::from("/tmp/x"))
        );
        assert_eq!(
            InputSource::parse("file:///tmp/with%20space.txt").unwrap(),
            InputSource::Local(PathBuf::from("/tmp/with space.txt"))
        );
        assert!(matches!(
            InputSource::parse("file://otherhost/tmp/x"),
            Err(Error::InvalidSource(_))
        ));
    }

    #[test]
    fn scheme_characters() {
        assert!(is_scheme("s3"));
        assert!(is_scheme("git+ssh"));
        assert!(!is_scheme("data/a"));
        assert!(!is_scheme("3s"));
        assert!(!is_scheme(""));
    }

    #[test]
    fn s3_key_is_not_percent_encoded() {
        let source = InputSource::parse("s3://bucket/with space.txt").unwrap();
        assert_eq!(
            source,
            InputSource::S3 {
                bucket: "bucket".into(),
                key: "with space.txt".into()
            }
        );
    }

    #[test]
    fn s3_uri_splits_bucket_and_key() {
        let source = InputSource::parse("s3://my-bucket/path/to/in.jsonl.gz").unwrap();
        assert_eq!(
            source,
            InputSource::S3 {
                bucket: "my-bucket".into(),
                key: "path/to/in.jsonl.gz".into()
            }
        );
        assert!(source.is_remote());
        assert_eq!(source.extension(), Some("gz"));
        assert_eq!(source.to_string(), "s3://my-bucket/path/to/in.jsonl.gz");
    }

    #[test]
    fn rejects_incomplete_s3_uris_and_unknown_schemes() {
        assert!(matches!(
            InputSource::parse("s3://bucket-only"),
            Err(Error::InvalidSource(_))
        ));
        assert!(matches!(
            InputSource::parse("ftp://host/file"),
            Err(Error::UnsupportedScheme { scheme, .. }) if scheme == "ftp"
        ));
        assert!(matches!(InputSource::parse(""), Err(Error::InvalidSource(_))));
    }
}
