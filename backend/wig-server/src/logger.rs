use crate::error::Result as ServerErrorResult;

use std::str::FromStr;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Initialize the fern logger. Unknown level strings fall back to `info`.
pub fn initialize(log_level: &str, colored: bool) -> ServerErrorResult<()> {
    let level_filter = LevelFilter::from_str(log_level).unwrap_or(LevelFilter::Info);

    let dispatch = if colored {
        // Colored output for TTY
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
    } else {
        // Plain output for non-TTY (systemd, docker logs)
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
    };

    dispatch
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}
