/// Direction the snake is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Turn cycle in counter-clockwise order (screen coordinates, y grows down).
/// A left turn moves one step forward in this array, a right turn one step
/// back, both taken modulo 4 so indices never go negative.
const TURN_CYCLE: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

impl Direction {
    /// Returns the delta (dx, dy) for moving one cell in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    fn cycle_index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }

    /// Resolve the new heading after applying a relative action
    pub fn turned(&self, action: Action) -> Direction {
        let i = self.cycle_index();
        match action {
            Action::Forward => *self,
            Action::Left => TURN_CYCLE[(i + 1) % 4],
            Action::Right => TURN_CYCLE[(i + 3) % 4],
        }
    }

    /// Heading after a single left turn
    pub fn left(&self) -> Direction {
        self.turned(Action::Left)
    }

    /// Heading after a single right turn
    pub fn right(&self) -> Direction {
        self.turned(Action::Right)
    }

    /// Relative action that would take this heading to `desired`, or `None`
    /// if `desired` is the 180-degree reversal (which the snake cannot do).
    pub fn action_towards(&self, desired: Direction) -> Option<Action> {
        if *self == desired {
            Some(Action::Forward)
        } else if self.left() == desired {
            Some(Action::Left)
        } else if self.right() == desired {
            Some(Action::Right)
        } else {
            None
        }
    }
}

/// Action relative to the snake's current heading
///
/// The discriminant doubles as the action's index into a Q-table row, so the
/// ordering here fixes how argmax ties break (lowest index wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward = 0,
    Left = 1,
    Right = 2,
}

impl Action {
    /// All actions in index order
    pub const ALL: [Action; 3] = [Action::Forward, Action::Left, Action::Right];

    /// Number of available actions
    pub const COUNT: usize = 3;

    /// Index of this action into a Q-table row
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Action for a row index; panics on an out-of-range index
    pub fn from_index(idx: usize) -> Action {
        Self::ALL[idx]
    }
}
