use std::time::Duration;
use std::time::Instant;

use log::debug;

use super::TerminationCondition;

/// A [`TerminationCondition`] which gives the search a wall-clock deadline.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    deadline: Instant,
    has_expired: bool,
}

impl TimeBudget {
    /// The deadline is `budget` from now.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget::until(Instant::now() + budget)
    }

    pub fn until(deadline: Instant) -> TimeBudget {
        TimeBudget {
            deadline,
            has_expired: false,
        }
    }

    /// The time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        if !self.has_expired && Instant::now() >= self.deadline {
            debug!("The time budget has run out");
            self.has_expired = true;
        }

        self.has_expired
    }
}
