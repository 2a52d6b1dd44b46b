//! The line processor: opens every input in order and hands each line to a
//! [`LineHandler`]. The first input that fails stops the run.
use tracing::{error, info};

use crate::core::options::{Options, S3Config};
use crate::core::timestamp::get_timestamp;
use crate::error::{Error, Result};
use crate::io::{InputSource, S3Client, Transports, get_s3_client};

/// Per-line extension point. Derived tools replace the default handler with
/// their own business logic.
pub trait LineHandler {
    /// `line` still carries its line ending, if it had one.
    fn process_line(&mut self, line: &str);
}

/// Default handler: log each line with surrounding whitespace stripped.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingLineHandler;

impl LineHandler for LoggingLineHandler {
    fn process_line(&mut self, line: &str) {
        info!("Processing line: {}", line.trim());
    }
}

#[derive(Debug)]
pub struct LineProcessor<H = LoggingLineHandler> {
    options: Options,
    transports: Transports,
    timestamp: String,
    handler: H,
}

impl LineProcessor<LoggingLineHandler> {
    /// Build a processor with the default logging handler.
    /// Logging must already be configured; see [`crate::logging::setup_logging`].
    pub fn new(options: Options, s3: Option<&S3Config>) -> Result<Self> {
        Self::with_handler(options, s3, LoggingLineHandler)
    }
}

impl<H: LineHandler> LineProcessor<H> {
    pub fn with_handler(options: Options, s3: Option<&S3Config>, handler: H) -> Result<Self> {
        let transports = Transports::new(get_s3_client(s3)?);
        Ok(Self::from_parts(options, transports, handler))
    }

    pub fn from_parts(options: Options, transports: Transports, handler: H) -> Self {
        Self {
            options,
            transports,
            timestamp: get_timestamp(),
            handler,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Captured at construction, for metadata written by derived tools.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn s3_client(&self) -> Option<&S3Client> {
        self.transports.s3_client()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Process every effective input in order.
    ///
    /// On the first failure an error record naming the input is logged and
    /// `Error::InputFailed` is returned; remaining inputs are not touched.
    pub fn run(&mut self) -> Result<()> {
        let inputs: Vec<String> = self
            .options
            .effective_inputs()
            .into_iter()
            .map(String::from)
            .collect();

        for input in inputs {
            if let Err(e) = self.process_input(&input) {
                error!("Error processing {}: {}", input, e);
                return Err(Error::InputFailed {
                    input,
                    reason: Box::new(e),
                });
            }
        }
        Ok(())
    }

    fn process_input(&mut self, input: &str) -> Result<()> {
        let source = InputSource::parse(input)?;
        // The reader is dropped when this function returns, on every path
        let lines = self.transports.open_text(&source)?;
        for line in lines {
            self.handler.process_line(&line?);
        }
        Ok(())
    }
}
