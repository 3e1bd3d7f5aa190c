//! Statistics of the solving process and the functions which write them out.
//!
//! Statistics are only written once [`configure_statistic_logging`] has been called; until then
//! [`log_statistic`] does nothing.
mod statistic_logger;
mod statistic_logging;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;

pub use crate::api::solver::SolverStatistics;
pub use crate::engine::ConsistencyStatistics;
pub use crate::engine::SearchStatistics;

/// A value which can be written out as one or more statistics.
///
/// See [`create_statistics_struct!`](crate::create_statistics_struct) for creating a struct of
/// statistics.
pub trait Statistic {
    fn log(&self, statistic_logger: StatisticLogger);
}

impl Statistic for u64 {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}

/// Generates a struct of counters which implements [`Statistic`] by logging every field under its
/// own name, prefixed with the name of the logger it is given.
///
/// # Example
/// ```rust
/// # use bagit_core::create_statistics_struct;
/// create_statistics_struct!(Statistics {
///     num_calls: u64
/// });
///
/// let statistics = Statistics::default();
///
/// assert_eq!(statistics.num_calls, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $name:ident { $($(#[$variable_documentation:meta])* $field:ident : $type:ident),+ $(,)? }) => {
        $(#[$struct_documentation])*
        #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name {
            $($(#[$variable_documentation])* pub $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $($crate::statistics::Statistic::log(&self.$field, statistic_logger.attach_to_prefix(stringify!($field))));+
            }
        }
    };
}
