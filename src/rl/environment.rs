use super::discretizer::{discretize, StateKey};
use super::observation::{observe, Observation};
use crate::game::{Action, GameConfig, GameEngine, GameState, StepResult};

/// Snake environment for tabular reinforcement learning
///
/// Wraps the game engine and exposes the usual RL surface: `reset` and `step`
/// return already-discretized state keys, so the agent only ever sees table
/// indices. One environment instance is reused across episodes; each `reset`
/// starts a fresh game but the wrapper itself is long-lived.
pub struct SnakeEnv {
    engine: GameEngine,
    state: GameState,
}

impl SnakeEnv {
    /// Create a new Snake environment
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        Self { engine, state }
    }

    /// Reset the environment and return the initial state key
    pub fn reset(&mut self) -> StateKey {
        self.state = self.engine.reset();
        self.state_key()
    }

    /// Step the environment with a relative action
    ///
    /// Returns the next state key, the reward, and the terminal flag. On a
    /// terminal step the key describes the post-collision state; the agent
    /// still bootstraps from that state's row rather than treating the
    /// continuation value as zero.
    pub fn step(&mut self, action: Action) -> (StateKey, f32, bool) {
        let result: StepResult = self.engine.step(&mut self.state, action);
        (self.state_key(), result.reward, result.terminated)
    }

    /// Current raw observation without stepping
    pub fn observation(&self) -> Observation {
        observe(&self.state)
    }

    /// Current discretized state key without stepping
    pub fn state_key(&self) -> StateKey {
        discretize(&self.observation(), self.state.previous_food_distance())
    }

    /// Reference to the current game state (for rendering and tests)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for tests that need to stage a board
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
