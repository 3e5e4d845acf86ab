use chrono::Local;
use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

/// colog's default style with a local wall-clock timestamp in front
struct TimestampedStyle;

impl CologStyle for TimestampedStyle {
    fn prefix_token(&self, level: &Level) -> String {
        format!(
            "{} {}{}{}",
            Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
            "[".blue().bold(),
            self.level_color(level, self.level_token(level)),
            "]".blue().bold()
        )
    }
}

pub struct Logger;

impl Logger {
    /// Logs go to stderr so rendered grids on stdout stay clean.
    pub fn init(verbosity: LevelFilter) {
        let mut builder = colog::basic_builder();
        builder
            .format(colog::formatter(TimestampedStyle))
            .target(env_logger::Target::Stderr)
            .filter_level(verbosity)
            .init();
    }
}
