/// Severity of a log line. Lines below `CALENDAR_LOG_LEVEL` (build time,
/// default `info`) are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    fn from_log_level(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }

    fn as_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }

    fn threshold() -> Self {
        option_env!("CALENDAR_LOG_LEVEL")
            .and_then(Self::parse)
            .unwrap_or(LogLevel::Info)
    }
}

/// Component-tagged logger writing to the browser console
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if level < LogLevel::threshold() {
            return;
        }

        let line = format_line(component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

/// Routes `log` records (e.g. from the `shared` crate) into [`Logger`],
/// tagged with the record's target module.
struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LogLevel::from_log_level(metadata.level()) >= LogLevel::threshold()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        let component = record.target();
        match LogLevel::from_log_level(record.level()) {
            LogLevel::Debug => Logger::debug_with_component(component, &message),
            LogLevel::Info => Logger::info_with_component(component, &message),
            LogLevel::Warn => Logger::warn_with_component(component, &message),
            LogLevel::Error => Logger::error_with_component(component, &message),
        }
    }

    fn flush(&self) {}
}

/// Install the console backend for the `log` facade. Call once at startup.
pub fn init() {
    match log::set_logger(&CONSOLE_LOGGER) {
        Ok(()) => log::set_max_level(LogLevel::threshold().as_level_filter()),
        Err(e) => Logger::warn_with_component("logging", &format!("Logger already installed: {}", e)),
    }
}

fn format_line(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}
