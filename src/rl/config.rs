//! Q-learning hyperparameter configuration

use serde::{Deserialize, Serialize};

/// Hyperparameters for the tabular Q-learning agent
///
/// Defaults are the values the table was tuned with for the Snake
/// environment. Degenerate values (negative alpha, gamma above 1) are not
/// validated; they are a caller misconfiguration and simply produce a
/// diverging table.
///
/// # Example
///
/// ```rust
/// use q_snake::rl::QLearningConfig;
///
/// let config = QLearningConfig {
///     alpha: 0.5,
///     ..Default::default()
/// };
/// assert_eq!(config.gamma, 0.9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QLearningConfig {
    /// Learning rate for the TD update
    ///
    /// Default: 0.95
    pub alpha: f32,

    /// Discount factor for future rewards
    ///
    /// Default: 0.9
    pub gamma: f32,

    /// Exploration rate at the start of training
    ///
    /// Default: 0.25
    pub epsilon_start: f32,

    /// Exploration rate at the end of training; epsilon decays linearly
    /// between the two across the episode budget
    ///
    /// Default: 0.01
    pub epsilon_stop: f32,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            alpha: 0.95,
            gamma: 0.9,
            epsilon_start: 0.25,
            epsilon_stop: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QLearningConfig::default();
        assert_eq!(config.alpha, 0.95);
        assert_eq!(config.gamma, 0.9);
        assert_eq!(config.epsilon_start, 0.25);
        assert_eq!(config.epsilon_stop, 0.01);
    }

    #[test]
    fn test_custom_config() {
        let config = QLearningConfig {
            gamma: 0.99,
            ..Default::default()
        };
        assert_eq!(config.gamma, 0.99);
        assert_eq!(config.alpha, 0.95); // From default
    }
}
