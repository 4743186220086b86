use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use super::global::GlobalArgs;

fn level_for(global: &GlobalArgs) -> LevelFilter {
    if global.quiet {
        return LevelFilter::Error;
    }
    match global.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a stderr logger at the level selected by `-v`/`-q`.
pub fn init(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level_for(global)))?;

    log4rs::init_config(config)?;
    Ok(())
}
