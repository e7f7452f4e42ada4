//! Terminal logging for the generator

use env_logger::{
    fmt::{Color, Formatter},
    Builder, Env, Target,
};
use log::{Level, Record};
use std::io::Write;

/// Environment variable overriding the log filter, e.g. `LOG=trace`
pub const LOG_ENV: &str = "LOG";

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Magenta,
    }
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn write_record(buf: &mut Formatter, record: &Record, with_target: bool) -> std::io::Result<()> {
    let mut level_style = buf.style();
    level_style.set_color(level_color(record.level()));

    let mut message_style = buf.style();
    if record.level() <= Level::Warn {
        message_style.set_color(level_color(record.level()));
    }

    if with_target {
        writeln!(
            buf,
            "[{}] {} - {}",
            level_style.value(record.level()),
            record.target(),
            message_style.value(record.args())
        )
    } else {
        writeln!(
            buf,
            "[{}] - {}",
            level_style.value(record.level()),
            message_style.value(record.args())
        )
    }
}

/// Sets up stdout logging. Verbose runs log debug output with the emitting
/// module; `LOG` takes precedence over both.
pub fn init_logger(verbose: bool) {
    Builder::from_env(Env::default().filter_or(LOG_ENV, default_filter(verbose)))
        .target(Target::Stdout)
        .format(move |buf, record| write_record(buf, record, verbose))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_lowers_default_filter() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn problems_stand_out() {
        assert!(matches!(level_color(Level::Error), Color::Red));
        assert!(matches!(level_color(Level::Warn), Color::Yellow));
    }
}
