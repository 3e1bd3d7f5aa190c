/// Keeps track of the best candidate out of a stream of (candidate, value) pairs, where "best"
/// depends on the [`Direction`].
pub trait TieBreaker<Var, Value> {
    /// Consider the next candidate with its value.
    fn consider(&mut self, variable: Var, value: Value);

    /// Returns the selected candidate and resets the tie-breaker, so it never hands out a
    /// selection based on values from an earlier round.
    fn select(&mut self) -> Option<Var>;

    fn get_direction(&self) -> Direction;
}

/// Whether the tie-breaker looks for the candidate with the largest or the smallest value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}
