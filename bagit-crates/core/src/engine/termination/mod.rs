//! A [`TerminationCondition`] is polled by the search every time it is about to place another
//! item. It indicates when the search should give up, even though it has neither found a packing
//! nor proven that none exists. The most common example is [`time_budget::TimeBudget`], which
//! gives the search a wall-clock deadline.

pub(crate) mod combinator;
pub(crate) mod decision_budget;
pub(crate) mod indefinite;
pub(crate) mod time_budget;

/// Determines when the search should stop before reaching a conclusion.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called every time the search tentatively places an item in a bag.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}
