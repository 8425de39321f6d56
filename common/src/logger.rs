use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!(
            "{}",
            format_line(&timestamp, self.prefix.as_deref(), file, line, message)
        );
    }
}

fn format_line(
    timestamp: &str,
    prefix: Option<&str>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
        None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn is_verbose() -> bool {
    LOGGER.get().is_some_and(|logger| logger.verbose)
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn log_debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get()
        && logger.verbose
    {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::log_debug(file!(), line!(), &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let line = format_line(
            "2026-01-01 00:00:00",
            None,
            "common/src/games/tictactoe/session.rs",
            12,
            "hello",
        );
        assert_eq!(line, "[2026-01-01 00:00:00][session.rs:12] hello");
    }

    #[test]
    fn test_format_line_with_prefix() {
        let line = format_line("ts", Some("Console"), "C:\\src\\main.rs", 3, "ready");
        assert_eq!(line, "[ts][Console][main.rs:3] ready");
    }
}
