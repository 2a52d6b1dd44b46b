//! S3 client factory and the remote-object transport.
//!
//! The AWS SDK is async; a small tokio runtime owned by the client drives each
//! request, and `SyncIoBridge` turns the object body into a blocking reader so
//! the rest of the crate stays synchronous.
use std::io::{BufRead, BufReader};

use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use tokio::runtime::Runtime;
use tokio_util::io::SyncIoBridge;

use super::source::InputSource;
use super::transport::Transport;
use crate::core::options::S3Config;
use crate::error::{Error, Result};

const CREDENTIALS_PROVIDER: &str = "lineproc";

/// Handle to an S3 (or S3-compatible) object store.
pub struct S3Client {
    client: aws_sdk_s3::Client,
    runtime: Runtime,
    endpoint: Option<String>,
}

impl S3Client {
    pub fn new(config: &S3Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("lineproc-s3")
            .enable_all()
            .build()?;

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let mut builder = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            // S3-compatible stores rarely support virtual-hosted buckets
            .force_path_style(true);
        if let Some(url) = &config.host_url {
            builder = builder.endpoint_url(url.clone());
        }

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            runtime,
            endpoint: config.host_url.clone(),
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Start a GetObject and return the body as a blocking buffered reader.
    pub fn get_object(&self, bucket: &str, key: &str) -> Result<Box<dyn BufRead>> {
        tracing::debug!(bucket, key, "Fetching S3 object");

        let request = self.client.get_object().bucket(bucket).key(key).send();
        let output = self.runtime.block_on(request).map_err(|e| Error::S3 {
            uri: format!("s3://{}/{}", bucket, key),
            message: DisplayErrorContext(&e).to_string(),
        })?;

        let body = Box::pin(output.body.into_async_read());
        let reader = SyncIoBridge::new_with_handle(body, self.runtime.handle().clone());
        Ok(Box::new(BufReader::new(reader)))
    }
}

impl std::fmt::Debug for S3Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Client")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Transport for S3Client {
    fn name(&self) -> &'static str {
        "s3"
    }

    fn open(&self, source: &InputSource) -> Result<Box<dyn BufRead>> {
        match source {
            InputSource::S3 { bucket, key } => self.get_object(bucket, key),
            other => Err(Error::InvalidSource(other.to_string())),
        }
    }
}

/// Build a client when S3 settings are available; `None` leaves S3 sources unreadable.
pub fn get_s3_client(config: Option<&S3Config>) -> Result<Option<S3Client>> {
    match config {
        Some(config) => {
            let client = S3Client::new(config)?;
            tracing::debug!(endpoint = ?client.endpoint(), "S3 client configured");
            Ok(Some(client))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::DEFAULT_REGION;

    fn config() -> S3Config {
        S3Config {
            access_key: "AKIA".into(),
            secret_key: "secret".into(),
            host_url: Some("http://127.0.0.1:9".into()),
            region: DEFAULT_REGION.into(),
        }
    }

    #[test]
    fn factory_without_config_yields_no_client() {
        assert!(get_s3_client(None).unwrap().is_none());
    }

    #[test]
    fn factory_builds_client_for_custom_endpoint() {
        let client = get_s3_client(Some(&config())).unwrap().unwrap();
        assert_eq!(client.endpoint(), Some("http://127.0.0.1:9"));
        assert_eq!(client.name(), "s3");
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[test]
    fn refuses_non_s3_sources() {
        let client = S3Client::new(&config()).unwrap();
        assert!(matches!(
            client.open(&InputSource::Stdin),
            Err(Error::InvalidSource(_))
        ));
    }
}
