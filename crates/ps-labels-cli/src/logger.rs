use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes `LEVEL: message` lines to stderr
#[derive(Clone, Copy)]
pub struct CliLogger {
    max_level: LevelFilter,
}

impl CliLogger {
    /// `verbosity` 0 shows warnings and errors, 1 adds info, 2 or more debug
    pub fn new(verbosity: u8) -> Self {
        let max_level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
        Self { max_level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(self.max_level);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARNING",
                Level::Info => "INFO",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            let _ = writeln!(std::io::stderr().lock(), "{}: {}", level, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
