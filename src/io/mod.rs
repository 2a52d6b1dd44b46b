//! I/O layer: source identifiers, the transport abstraction with its local and
//! S3 implementations, transparent decompression, and line/JSON readers.
pub mod compression;
pub mod json;
pub mod lines;
pub mod local;
pub mod s3;
pub mod source;
pub mod transport;

pub use json::read_json;
pub use lines::TextLines;
pub use local::LocalTransport;
pub use s3::{S3Client, get_s3_client};
pub use source::InputSource;
pub use transport::{Transport, Transports};
