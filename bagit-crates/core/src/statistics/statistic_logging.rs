use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// How statistics are written: every statistic becomes a line `{prefix} {name}={value}`,
/// optionally followed by a closing line once a block of statistics is done.
struct StatisticOptions {
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Turns on the writing of statistics.
///
/// Only the first call has an effect. If no `writer` is given, statistics go to stdout.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::from(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or(Box::new(stdout())),
        })
    });
}

/// Writes the statistic `name` with `value`, if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() else {
        return;
    };

    if let Ok(mut statistic_options) = statistic_options_lock.write() {
        let name = match statistic_options.statistics_casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let prefix = statistic_options.statistic_prefix;
        if let Err(e) = writeln!(
            statistic_options.statistics_writer,
            "{prefix} {name}={value}"
        ) {
            debug!("Could not write statistic: {e}");
        }
    }
}

/// Writes the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() else {
        return;
    };

    if let Ok(mut statistic_options) = statistic_options_lock.write() {
        if let Some(post_fix) = statistic_options.after_statistics {
            if let Err(e) = writeln!(statistic_options.statistics_writer, "{post_fix}") {
                debug!("Could not write statistic: {e}");
            }
        }
    }
}

/// Returns whether statistics are written at all.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
