use std::{fmt, io::Write as _, str::FromStr, sync::OnceLock};

use colored::{ColoredString, Colorize as _};
use env_logger::Env;
use log::Level;
use serde::Deserialize;

static LOGGER: OnceLock<()> = OnceLock::new();

/// Console line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStyle {
    /// `[ HH:MM:SS ] | message`
    #[default]
    Timestamp,
    /// `[i] message`, `[!] message`, `[x] message`
    Symbol,
}

impl FromStr for LogStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "timestamp" => Ok(LogStyle::Timestamp),
            "symbol" => Ok(LogStyle::Symbol),
            other => Err(format!(
                "unknown log style `{other}`, expected `timestamp` or `symbol`"
            )),
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogStyle::Timestamp => write!(f, "timestamp"),
            LogStyle::Symbol => write!(f, "symbol"),
        }
    }
}

fn colorize(level: Level, message: String) -> ColoredString {
    match level {
        Level::Error => message.red(),
        Level::Warn => message.yellow(),
        Level::Info => message.normal(),
        Level::Debug | Level::Trace => message.dimmed(),
    }
}

fn symbol(level: Level) -> ColoredString {
    match level {
        Level::Error => "[x]".red().bold(),
        Level::Warn => "[!]".yellow().bold(),
        Level::Info => "[i]".cyan().bold(),
        Level::Debug | Level::Trace => "[.]".dimmed(),
    }
}

/// Renders one console line in the given style.
pub fn format_line(style: LogStyle, level: Level, time: &str, message: &str) -> String {
    match style {
        LogStyle::Timestamp => format!(
            "{} {} {}",
            format!("[ {time} ]").cyan(),
            "|".white(),
            colorize(level, message.to_string())
        ),
        LogStyle::Symbol => format!("{} {}", symbol(level), colorize(level, message.to_string())),
    }
}

/// Installs the global logger once. Default filter is `info`, `RUST_LOG` overrides.
pub fn init_logger(style: LogStyle) {
    LOGGER.get_or_init(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .format(move |buf, record| {
                let time = chrono::Local::now().format("%H:%M:%S").to_string();
                let line = format_line(style, record.level(), &time, &record.args().to_string());
                writeln!(buf, "{line}")
            })
            .init();
    });
}
