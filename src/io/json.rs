use serde::de::DeserializeOwned;

use super::source::InputSource;
use super::transport::Transports;
use crate::error::Result;

/// Read a whole JSON document from any source identifier.
pub fn read_json<T: DeserializeOwned>(transports: &Transports, identifier: &str) -> Result<T> {
    let source = InputSource::parse(identifier)?;
    let reader = transports.open_text(&source)?.into_inner();
    Ok(serde_json::from_reader(reader)?)
}
