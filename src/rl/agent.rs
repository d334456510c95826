use rand::Rng;

use super::config::QLearningConfig;
use super::discretizer::StateKey;
use super::environment::SnakeEnv;
use super::qtable::QTable;
use crate::game::{Action, GameConfig, GameState};

/// Summary of a finished episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeOutcome {
    /// Sum of rewards collected over the episode
    pub total_reward: f32,
    /// Number of steps until the terminal collision
    pub steps: usize,
    /// Food eaten
    pub score: u32,
}

/// Tabular Q-learning agent
///
/// Owns the value table, the environment it learns in, and the RNG for
/// exploration. The table survives across episodes; everything else about an
/// episode is discarded when it ends.
pub struct QAgent {
    table: QTable,
    env: SnakeEnv,
    config: QLearningConfig,
    rng: rand::rngs::ThreadRng,
}

impl QAgent {
    /// Create a new agent with a zero-initialized table
    pub fn new(config: QLearningConfig, game_config: GameConfig) -> Self {
        Self {
            table: QTable::new(),
            env: SnakeEnv::new(game_config),
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Epsilon-greedy action selection
    ///
    /// With probability `epsilon` draws uniformly over the three actions,
    /// otherwise returns `greedy`. The exploration branch is a proper
    /// weighted draw; iteration order never biases it.
    pub fn select_action(&mut self, epsilon: f32, greedy: Action) -> Action {
        if self.rng.gen_bool(epsilon.clamp(0.0, 1.0) as f64) {
            Action::from_index(self.rng.gen_range(0..Action::COUNT))
        } else {
            greedy
        }
    }

    /// Run one learning episode at the given exploration rate
    ///
    /// Standard one-step TD loop: observe, pick epsilon-greedily around the
    /// table's argmax, step, then update only the visited (state, action)
    /// cell toward `reward + gamma * max_a' Q[s', a']`.
    pub fn run_episode(&mut self, epsilon: f32) -> EpisodeOutcome {
        let mut state = self.env.reset();
        let mut outcome = EpisodeOutcome {
            total_reward: 0.0,
            steps: 0,
            score: 0,
        };

        loop {
            let (next_state, reward, done) = self.td_step(state, epsilon);

            outcome.total_reward += reward;
            outcome.steps += 1;

            if done {
                break;
            }
            state = next_state;
        }

        outcome.score = self.env.state().score;
        outcome
    }

    /// One epsilon-greedy transition plus its TD update
    fn td_step(&mut self, state: StateKey, epsilon: f32) -> (StateKey, f32, bool) {
        let greedy = self.table.greedy_action(state);
        let action = self.select_action(epsilon, greedy);

        let (next_state, reward, done) = self.env.step(action);

        // The target bootstraps from the next state's row even on terminal
        // steps, where that row belongs to the post-collision state. The
        // textbook rule would zero the continuation value there instead;
        // switching changes the learned values near death states.
        let target = reward + self.config.gamma * self.table.max_value(next_state);
        let delta = self.config.alpha * (target - self.table.get(state, action));
        self.table.nudge(state, action, delta);

        (next_state, reward, done)
    }

    /// Play one full episode greedily (epsilon = 0), without learning
    ///
    /// Used for evaluation after training; the episode is capped so an agent
    /// stuck in a loop still returns.
    pub fn act_greedy(&mut self, max_steps: usize) -> EpisodeOutcome {
        self.reset_env();
        let mut outcome = EpisodeOutcome {
            total_reward: 0.0,
            steps: 0,
            score: 0,
        };

        while outcome.steps < max_steps {
            let (reward, done) = self.step_greedy();
            outcome.total_reward += reward;
            outcome.steps += 1;
            if done {
                break;
            }
        }

        outcome.score = self.env.state().score;
        outcome
    }

    /// Start a fresh game in the owned environment
    pub fn reset_env(&mut self) {
        self.env.reset();
    }

    /// Advance one tick under the greedy policy, without learning
    ///
    /// Returns the reward and terminal flag; drives the watch mode's tick
    /// loop where rendering happens between steps.
    pub fn step_greedy(&mut self) -> (f32, bool) {
        let action = self.table.greedy_action(self.env.state_key());
        let (_next, reward, done) = self.env.step(action);
        (reward, done)
    }

    /// The learned table
    pub fn table(&self) -> &QTable {
        &self.table
    }

    /// Current game state of the owned environment (for rendering)
    pub fn state(&self) -> &GameState {
        self.env.state()
    }
}
