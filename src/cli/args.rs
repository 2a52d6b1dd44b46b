use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;

use lineproc::{LogLevel, Options};

#[derive(Parser, Debug)]
#[command(
    name = "lineproc",
    version,
    about = "Read lines from local files, S3 objects or stdin and process each one",
    after_help = "\
EXAMPLES:
    lineproc -i input.txt --log-level DEBUG --log-file process.log
    lineproc -i s3://bucket/input.jsonl --log-level INFO
    cat input.txt | lineproc"
)]
pub struct CliArgs {
    /// Input files or s3:// URIs, processed in order (default: stdin)
    #[arg(
        short,
        long,
        num_args = 1..,
        value_name = "INPUT",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub input: Vec<String>,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Write log to FILE in addition to stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn into_options(self) -> Options {
        Options {
            log_level: self.log_level,
            log_file: self.log_file,
            inputs: self.input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults_to_info_and_stdin() {
        let options = CliArgs::try_parse_from(["lineproc"]).unwrap().into_options();
        assert_eq!(options.log_level, LogLevel::Info);
        assert!(options.log_file.is_none());
        assert_eq!(options.effective_inputs(), vec![lineproc::STDIN_SENTINEL]);
    }

    #[test]
    fn input_takes_several_space_separated_values() {
        let args = CliArgs::try_parse_from([
            "lineproc",
            "-i",
            "a.txt",
            "s3://bucket/b.txt",
            "--log-level",
            "WARNING",
            "--log-file",
            "run.log",
        ])
        .unwrap();
        assert_eq!(args.input, vec!["a.txt", "s3://bucket/b.txt"]);
        assert_eq!(args.log_level, LogLevel::Warning);
        assert_eq!(args.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = CliArgs::try_parse_from(["lineproc", "--log-level", "VERBOSE"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn rejects_empty_input_and_missing_values() {
        let err = CliArgs::try_parse_from(["lineproc", "--input", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = CliArgs::try_parse_from(["lineproc", "-i"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidValue | ErrorKind::TooFewValues
        ));
    }
}
