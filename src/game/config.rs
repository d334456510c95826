use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// Reward values are the learning signal: dying must cost more than any food
/// gain, and every empty step carries a small penalty so the agent does not
/// wander. Degenerate values are the caller's problem and are not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    /// Reward for eating food
    pub food_reward: f32,
    /// Reward for a step that neither eats nor dies
    pub step_penalty: f32,
    /// Reward for dying
    pub death_penalty: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 24,
            grid_height: 18,
            initial_snake_length: 3,
            food_reward: 20.0,
            step_penalty: -1.0,
            death_penalty: -50.0,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 24);
        assert_eq!(config.grid_height, 18);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_reward, 20.0);
        assert_eq!(config.step_penalty, -1.0);
        assert_eq!(config.death_penalty, -50.0);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        // Rewards come from the defaults
        assert_eq!(config.food_reward, 20.0);
    }
}
