use std::process::ExitCode;

use tracing::{debug, error, info};

use lineproc::{LineProcessor, S3Config, setup_logging};

use super::args::CliArgs;

/// Exit status when an input cannot be opened or read.
const EXIT_INPUT_FAILED: u8 = 1;

pub fn run(args: CliArgs) -> ExitCode {
    let options = args.into_options();

    // Held until return so the file writer flushes before the process exits
    let _guard = match setup_logging(options.log_level, options.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("lineproc: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let s3_config = match S3Config::from_env() {
        Ok(config) => Some(config),
        Err(missing) => {
            debug!("{} not set, S3 inputs are disabled", missing);
            None
        }
    };

    let mut processor = match LineProcessor::new(options, s3_config.as_ref()) {
        Ok(processor) => processor,
        Err(e) => {
            error!("Failed to set up processor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string(processor.options()) {
        Ok(json) => info!("Parsed options: {}", json),
        Err(e) => debug!("Could not serialize options: {}", e),
    }
    debug!(timestamp = processor.timestamp(), "Run started");

    match processor.run() {
        Ok(()) => ExitCode::SUCCESS,
        // The failing input was already logged by the processor
        Err(_) => ExitCode::from(EXIT_INPUT_FAILED),
    }
}
