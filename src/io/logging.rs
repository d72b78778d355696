//! Console logging through `log4rs`

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;

use crate::io::configuration::LOG_PATTERN;
use crate::io::error::{Result, invalid_parameter};

/// Build the stderr logging configuration for a level
///
/// # Errors
///
/// Returns an error if the configuration is rejected by `log4rs`.
pub fn logging_config(level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|errors| invalid_parameter("log-level", &level, &errors))
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a logger is already installed.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    let config = logging_config(level)?;
    log4rs::init_config(config).map_err(|error| invalid_parameter("log-level", &level, &error))?;
    Ok(())
}
