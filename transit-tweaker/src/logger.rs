//! Logging seam between the tweak pass and the hosting server.
use colored::{Color, Colorize};

/// `log` target used by [`LogFacade`].
pub const LOG_TARGET: &str = "transit_tweaker";

/// Console colors the host logger understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTextColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl From<LogTextColor> for Color {
    fn from(color: LogTextColor) -> Self {
        match color {
            LogTextColor::Black => Self::Black,
            LogTextColor::Red => Self::Red,
            LogTextColor::Green => Self::Green,
            LogTextColor::Yellow => Self::Yellow,
            LogTextColor::Blue => Self::Blue,
            LogTextColor::Magenta => Self::Magenta,
            LogTextColor::Cyan => Self::Cyan,
            LogTextColor::White => Self::White,
            LogTextColor::Gray => Self::BrightBlack,
        }
    }
}

/// Logger capability provided by the host.
pub trait ModLogger {
    fn info(&self, message: &str);

    fn log_with_color(&self, message: &str, color: LogTextColor);
}

/// Routes host log calls through the `log` facade.
///
/// Colored lines go out at info level; whether they are written at all is
/// decided by the caller (the tweak pass checks `debug` in its config).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl ModLogger for LogFacade {
    fn info(&self, message: &str) {
        log::info!(target: LOG_TARGET, "{message}");
    }

    fn log_with_color(&self, message: &str, color: LogTextColor) {
        log::info!(target: LOG_TARGET, "{}", message.color(Color::from(color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn gray_maps_to_bright_black() {
        assert_eq!(Color::from(LogTextColor::Gray), Color::BrightBlack);
        assert_eq!(Color::from(LogTextColor::Cyan), Color::Cyan);
    }

    #[test]
    fn facade_writes_both_calls_at_info_level() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        let logger = LogFacade;
        logger.info("[TransitTweaker] loaded.");
        logger.log_with_color("[TransitTweaker] Changed Bear price from 1 to 2", LogTextColor::Cyan);

        let records = CAPTURE.records.lock().unwrap();
        let ours: Vec<&(log::Level, String, String)> = records
            .iter()
            .filter(|(_, target, _)| target == LOG_TARGET)
            .collect();
        assert_eq!(ours.len(), 2);
        assert!(ours.iter().all(|(level, _, _)| *level == log::Level::Info));
        assert_eq!(ours[0].2, "[TransitTweaker] loaded.");
        assert!(ours[1].2.contains("[TransitTweaker] Changed Bear price from 1 to 2"));
    }

    struct CaptureLog {
        records: Mutex<Vec<(log::Level, String, String)>>,
    }

    static CAPTURE: CaptureLog = CaptureLog {
        records: Mutex::new(Vec::new()),
    };

    impl log::Log for CaptureLog {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            self.records.lock().unwrap().push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }
}
