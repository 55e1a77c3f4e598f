// src/utils/logger.rs
use crate::utils::path::get_log_dir;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use time::macros::format_description;
use tracing_appender::rolling;
use tracing_subscriber::{
    fmt::{self, time::LocalTime},
    layer::SubscriberExt,
    registry,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILE_PREFIX: &str = "lingo.log";
const DEFAULT_LEVEL: &str = "info";

#[derive(Debug)]
pub struct LoggerBuilder {
    log_dir: PathBuf,
    file_prefix: String,
    default_level: String,
    stdout: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        LoggerBuilder {
            log_dir: get_log_dir(),
            file_prefix: DEFAULT_FILE_PREFIX.into(),
            default_level: DEFAULT_LEVEL.into(),
            stdout: true,
        }
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    pub fn stdout(mut self, enabled: bool) -> Self {
        self.stdout = enabled;
        self
    }

    /// `RUST_LOG` wins over the configured default level.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_level))
    }

    pub fn init(self) -> Result<()> {
        fs::create_dir_all(&self.log_dir)
            .with_context(|| format!("Failed to create log dir {}", self.log_dir.display()))?;
        let file_appender = rolling::daily(&self.log_dir, &self.file_prefix);

        let time_format = LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
        ));

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_thread_names(true)
            .with_timer(time_format.clone());

        let stdout_layer = self.stdout.then(|| {
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .with_thread_names(true)
                .with_timer(time_format)
        });

        registry()
            .with(self.filter())
            .with(file_layer)
            .with(stdout_layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let builder = LoggerBuilder::new()
            .log_dir("/tmp/lingo-logs")
            .file_prefix("test")
            .default_level("debug")
            .stdout(false);
        assert_eq!(builder.log_dir, PathBuf::from("/tmp/lingo-logs"));
        assert_eq!(builder.file_prefix, "test");
        assert_eq!(builder.default_level, "debug");
        assert!(!builder.stdout);
    }
}
