//! Training mode for the Q-learning agent
//!
//! Runs the headless training loop: one learning episode per iteration with
//! a linearly decaying exploration rate, periodic progress reports with
//! table diagnostics, and a final greedy evaluation episode. Nothing here
//! touches the terminal beyond plain stdout prints, so it works over any
//! pipe or CI log.

use crate::game::GameConfig;
use crate::metrics::TrainingStats;
use crate::rl::{QAgent, QLearningConfig};

/// Configuration for training mode
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Number of episodes to train
    pub num_episodes: usize,

    /// Log training progress every N episodes
    pub log_frequency: usize,

    /// Step cap for the final greedy evaluation episode
    pub eval_step_cap: usize,

    /// Game configuration (grid size, rewards)
    pub game_config: GameConfig,

    /// Q-learning hyperparameters
    pub q_config: QLearningConfig,
}

impl TrainConfig {
    /// Create a training configuration with defaults for everything but the
    /// episode count
    pub fn new(num_episodes: usize) -> Self {
        Self {
            num_episodes,
            log_frequency: 25,
            eval_step_cap: 2000,
            game_config: GameConfig::default(),
            q_config: QLearningConfig::default(),
        }
    }

    /// Exploration rate for a given episode: linear decay from
    /// `epsilon_start` to `epsilon_stop` across the episode budget
    pub fn epsilon_for_episode(&self, episode: usize) -> f32 {
        let start = self.q_config.epsilon_start;
        let stop = self.q_config.epsilon_stop;
        if self.num_episodes <= 1 {
            return start;
        }
        let fraction = episode as f32 / (self.num_episodes - 1) as f32;
        start + (stop - start) * fraction
    }
}

/// Training mode: drives the agent through its episode budget
pub struct TrainMode {
    agent: QAgent,
    stats: TrainingStats,
    config: TrainConfig,
}

impl TrainMode {
    /// Create a new training mode with a fresh, zero-initialized agent
    pub fn new(config: TrainConfig) -> Self {
        let agent = QAgent::new(config.q_config.clone(), config.game_config.clone());

        // 100-episode rolling window for the progress reports
        let stats = TrainingStats::new(100);

        Self {
            agent,
            stats,
            config,
        }
    }

    /// Run the training loop and return the trained agent
    ///
    /// The agent is handed back so callers can keep using the learned table
    /// in-process (the watch mode does exactly that); the table is never
    /// persisted.
    pub fn run(mut self) -> QAgent {
        self.print_header();

        for episode in 0..self.config.num_episodes {
            let epsilon = self.config.epsilon_for_episode(episode);
            let outcome = self.agent.run_episode(epsilon);

            self.stats
                .record_episode(outcome.total_reward, outcome.steps, outcome.score);

            if (episode + 1) % self.config.log_frequency == 0 {
                self.print_progress(episode + 1, epsilon);
            }
        }

        println!("\nTraining complete.");
        println!("{}", self.stats.format_summary());
        println!("{}", self.table_diagnostics_line());

        // Greedy evaluation episode
        let eval = self.agent.act_greedy(self.config.eval_step_cap);
        println!(
            "\nGreedy evaluation: score {} in {} steps (total reward {:.1})",
            eval.score, eval.steps, eval.total_reward
        );

        self.agent
    }

    fn print_header(&self) {
        println!("{}", "=".repeat(70));
        println!("Q-Learning Training - Snake");
        println!("{}", "=".repeat(70));
        println!("Episodes: {}", self.config.num_episodes);
        println!(
            "Grid: {}x{}",
            self.config.game_config.grid_width, self.config.game_config.grid_height
        );
        println!("Hyperparameters:");
        println!("  Alpha: {}", self.config.q_config.alpha);
        println!("  Gamma: {}", self.config.q_config.gamma);
        println!(
            "  Epsilon: {} -> {} (linear)",
            self.config.q_config.epsilon_start, self.config.q_config.epsilon_stop
        );
        println!("Logging: every {} episodes", self.config.log_frequency);
        println!("{}", "=".repeat(70));
        println!();
    }

    /// Periodic progress report: rolling episode stats plus the current
    /// table diagnostics
    fn print_progress(&self, episode: usize, epsilon: f32) {
        println!(
            "[Episode {}/{}] eps {:.3} | {}",
            episode,
            self.config.num_episodes,
            epsilon,
            self.stats.format_summary()
        );
        println!("  {}", self.table_diagnostics_line());
    }

    fn table_diagnostics_line(&self) -> String {
        let table = self.agent.table();
        let (state, action, value) = table.max_entry();
        format!(
            "Table: mean Q {:.3} | unvisited cells {} | max Q {:.2} at state {} / {:?}",
            table.mean(),
            table.unvisited_count(),
            value,
            state.index(),
            action,
        )
    }
}
