//! log4rs setup.

use crate::config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Initialise logging from `log4rs.yml` when present, else log `info` and
/// above to stderr. stdout carries the report only.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(config::LOG4RS_FILE).exists() {
        log4rs::init_file(config::LOG4RS_FILE, Default::default())?;
        return Ok(());
    }
    log4rs::init_config(stderr_config(LevelFilter::Info)?)?;
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
