#![doc = r#"
lineproc — a template for line-oriented command-line tools.

Reads lines from local files, S3 objects (`s3://bucket/key`) or standard input,
one source after another, and hands every line to a [`LineHandler`]. The default
handler logs each line; derived tools plug in their own.

Quick start
-----------
```rust,no_run
use lineproc::{LineHandler, LineProcessor, LogLevel, Options, setup_logging};

struct CountWords(usize);

impl LineHandler for CountWords {
    fn process_line(&mut self, line: &str) {
        self.0 += line.split_whitespace().count();
    }
}

fn main() -> lineproc::Result<()> {
    let _guard = setup_logging(LogLevel::Info, None)?;
    let options = Options {
        inputs: vec!["s3://bucket/corpus.txt.gz".into(), "local.txt".into()],
        ..Default::default()
    };
    let s3 = lineproc::S3Config::from_env().ok();
    let mut processor = LineProcessor::with_handler(options, s3.as_ref(), CountWords(0))?;
    processor.run()?;
    println!("{} words", processor.handler().0);
    Ok(())
}
```

Error handling
--------------
A source that cannot be opened or read stops the run: an error record naming it
is logged and [`Error::InputFailed`] is returned. Later sources are not read.

Useful modules
--------------
- [`core`] — options, the line processor and the run timestamp.
- [`io`] — source identifiers, transports (local, S3), line and JSON readers.
- [`logging`] — console and file logging setup.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::core::options::{Options, S3Config, STDIN_SENTINEL};
pub use crate::core::processor::{LineHandler, LineProcessor, LoggingLineHandler};
pub use crate::core::timestamp::get_timestamp;
pub use error::{Error, Result};
pub use io::{InputSource, S3Client, Transport, Transports, get_s3_client, read_json};
pub use logging::{LoggingGuard, setup_logging};
pub use types::LogLevel;
