use crate::game::{Action, GameState};

/// Raw observation of the game as seen from the snake's head
///
/// All features are relative to the current heading, not to the grid axes:
/// `danger_left` is the cell a left turn would enter, `food_ahead` means the
/// food lies further along the heading axis, and so on. When the food sits
/// exactly on one of the axes the corresponding pair of flags is both false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Collision one cell ahead of the head
    pub danger_ahead: bool,
    /// Collision one cell to the left of the head
    pub danger_left: bool,
    /// Collision one cell to the right of the head
    pub danger_right: bool,
    /// Raw Euclidean head-to-food distance, in cells
    pub food_distance: f32,
    /// Food lies to the left of the heading axis
    pub food_left: bool,
    /// Food lies to the right of the heading axis
    pub food_right: bool,
    /// Food lies ahead along the heading axis
    pub food_ahead: bool,
    /// Food lies behind along the heading axis
    pub food_behind: bool,
}

/// Compute the heading-relative observation for the current state
///
/// Danger flags probe the three reachable neighbor cells with the state's
/// collision check. Food flags project the head-to-food vector onto the
/// heading vector and its left-turn vector, so the same code covers all
/// four headings without per-direction branches.
pub fn observe(state: &GameState) -> Observation {
    let head = state.snake.head();
    let heading = state.snake.direction;

    let (fx, fy) = heading.delta();
    let (lx, ly) = heading.turned(Action::Left).delta();

    let probe = |dx: i32, dy: i32| state.is_collision_at(head.moved_by(dx, dy));

    let to_food = (state.food.x - head.x, state.food.y - head.y);
    // Longitudinal and lateral components of the head-to-food vector
    let along = to_food.0 * fx + to_food.1 * fy;
    let across = to_food.0 * lx + to_food.1 * ly;

    Observation {
        danger_ahead: probe(fx, fy),
        danger_left: probe(lx, ly),
        danger_right: probe(-lx, -ly),
        food_distance: head.distance_to(state.food),
        food_left: across > 0,
        food_right: across < 0,
        food_ahead: along > 0,
        food_behind: along < 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Snake};

    fn state_with(head: Position, dir: Direction, food: Position) -> GameState {
        GameState::new(Snake::new(head, dir, 3), food, 20, 20)
    }

    #[test]
    fn test_open_field_has_no_danger() {
        let state = state_with(Position::new(10, 10), Direction::Right, Position::new(15, 10));
        let obs = observe(&state);

        assert!(!obs.danger_ahead);
        assert!(!obs.danger_left);
        assert!(!obs.danger_right);
    }

    #[test]
    fn test_wall_danger_is_heading_relative() {
        // Head against the right wall, heading right: wall is ahead
        let state = state_with(Position::new(19, 10), Direction::Right, Position::new(5, 10));
        let obs = observe(&state);
        assert!(obs.danger_ahead);
        assert!(!obs.danger_left);
        assert!(!obs.danger_right);

        // Same cell heading up: the wall is now to the right
        let state = state_with(Position::new(19, 10), Direction::Up, Position::new(5, 10));
        let obs = observe(&state);
        assert!(!obs.danger_ahead);
        assert!(!obs.danger_left);
        assert!(obs.danger_right);
    }

    #[test]
    fn test_own_body_is_danger() {
        let mut state = state_with(Position::new(10, 10), Direction::Up, Position::new(5, 5));
        // Body trailing to the west of the head; heading up puts it on the left
        state.snake.body = vec![
            Position::new(10, 10),
            Position::new(9, 10),
            Position::new(8, 10),
        ];
        let obs = observe(&state);
        assert!(obs.danger_left);
        assert!(!obs.danger_ahead);
        assert!(!obs.danger_right);
    }

    #[test]
    fn test_food_flags_heading_right() {
        // Food up-and-ahead of a rightward heading: ahead + left
        let state = state_with(Position::new(10, 10), Direction::Right, Position::new(14, 6));
        let obs = observe(&state);
        assert!(obs.food_ahead);
        assert!(!obs.food_behind);
        assert!(obs.food_left);
        assert!(!obs.food_right);
    }

    #[test]
    fn test_food_flags_heading_down() {
        // Same food cell, heading down: behind + left (left of Down is +x)
        let state = state_with(Position::new(10, 10), Direction::Down, Position::new(14, 6));
        let obs = observe(&state);
        assert!(!obs.food_ahead);
        assert!(obs.food_behind);
        assert!(obs.food_left);
        assert!(!obs.food_right);
    }

    #[test]
    fn test_axis_alignment_is_neither() {
        // Food directly ahead: lateral flags both false
        let state = state_with(Position::new(10, 10), Direction::Right, Position::new(15, 10));
        let obs = observe(&state);
        assert!(obs.food_ahead);
        assert!(!obs.food_left);
        assert!(!obs.food_right);

        // Food directly above a rightward heading: longitudinal flags both
        // false, and up is the left side of a rightward heading
        let state = state_with(Position::new(10, 10), Direction::Right, Position::new(10, 4));
        let obs = observe(&state);
        assert!(!obs.food_ahead);
        assert!(!obs.food_behind);
        assert!(obs.food_left);
        assert!(!obs.food_right);
    }

    #[test]
    fn test_food_distance_is_euclidean() {
        let state = state_with(Position::new(10, 10), Direction::Right, Position::new(13, 14));
        let obs = observe(&state);
        assert_eq!(obs.food_distance, 5.0);
    }
}
