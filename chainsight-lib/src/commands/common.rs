use crate::Result;
use crate::commands::Config;
use crate::reports::ConsoleStyle;
use crate::scoring::RiskScorer;
use camino::Utf8PathBuf;
use clap::ValueEnum;
use log::LevelFilter;
use ohno::IntoAppError;
use terminal_size::{Width, terminal_size};

/// Width used when stdout is not a terminal
const DEFAULT_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

pub fn current_dir() -> Result<Utf8PathBuf> {
    let dir = std::env::current_dir().into_app_err("determining the current directory")?;
    Utf8PathBuf::try_from(dir).into_app_err("current directory is not valid UTF-8")
}

/// Load weights from `config` (or `chainsight.toml` in the working directory) and build a scorer.
pub fn load_scorer(config: Option<&Utf8PathBuf>) -> Result<RiskScorer> {
    let config = Config::load(&current_dir()?, config)?;
    config.scorer()
}

pub fn console_style(colors: bool) -> ConsoleStyle {
    let width = terminal_size().map_or(DEFAULT_WIDTH, |(Width(w), _)| usize::from(w));
    ConsoleStyle { colors, width }
}
