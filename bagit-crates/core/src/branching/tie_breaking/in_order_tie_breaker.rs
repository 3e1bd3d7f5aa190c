use super::Direction;
use super::TieBreaker;

/// A tie-breaker which selects the first candidate it receives with the best value.
///
/// For example, with [`Direction::Minimum`], if items `i2` and `i0` both have value 5 and `i2` is
/// considered first, `i2` is selected. Selectors feed candidates in declaration order, which makes
/// declaration order the final tie-break.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    selected_variable: Option<Var>,
    selected_value: Option<Value>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let is_better = match self.selected_value.as_ref() {
            None => true,
            Some(selected_value) => match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            },
        };

        if is_better {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
