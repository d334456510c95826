use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::Rng;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Reward for this step (the RL learning signal)
    pub reward: f32,
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
///
/// The engine is stateless between games apart from its RNG; each episode
/// operates on the `GameState` returned by [`GameEngine::reset`].
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Reset the game to its starting configuration: a horizontal snake in
    /// the grid center heading right, food at a random free cell, score
    /// zeroed, and the distance history primed with the initial distance.
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food_avoid_snake(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one step of the game
    ///
    /// The relative `action` is resolved against the current heading, then
    /// the head advances one cell. Eating keeps the tail (the snake grows)
    /// and relocates the food; any other step pops the tail. A collision
    /// overrides the reward with the death penalty and terminates without
    /// updating the distance history.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                reward: 0.0,
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: None,
                },
            };
        }

        state.snake.direction = state.snake.direction.turned(action);

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);
        let ate_food = new_head == state.food;

        state.snake.advance(ate_food);
        state.steps += 1;

        let mut reward = self.config.step_penalty;
        if ate_food {
            state.score += 1;
            reward = self.config.food_reward;
            state.food = self.spawn_food_avoid_snake(&state.snake);
        }

        if let Some(collision_type) = self.check_collision(state) {
            state.is_alive = false;

            return StepResult {
                reward: self.config.death_penalty,
                terminated: true,
                info: StepInfo {
                    ate_food,
                    collision_type: Some(collision_type),
                },
            };
        }

        state.push_food_distance();

        StepResult {
            reward,
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    /// Check whether the head is in a colliding cell
    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head();

        if !state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random cell not occupied by the snake, retrying until
    /// a free cell is drawn. Terminates as long as the grid is larger than
    /// the snake, which the grid/snake sizing guarantees.
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Position {
        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
