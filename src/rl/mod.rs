//! Tabular Q-learning for the Snake game
//!
//! Provides:
//! - Heading-relative observations over the raw game state
//! - Discretization of observations into dense table keys
//! - The Q-table itself and the epsilon-greedy learning agent
//! - An environment wrapper with the usual reset/step RL surface

pub mod agent;
pub mod config;
pub mod discretizer;
pub mod environment;
pub mod observation;
pub mod qtable;

pub use agent::{EpisodeOutcome, QAgent};
pub use config::QLearningConfig;
pub use discretizer::{discretize, StateKey, NUM_STATES};
pub use environment::SnakeEnv;
pub use observation::{observe, Observation};
pub use qtable::QTable;
