use anyhow::Result;
use clap::{Parser, ValueEnum};
use q_snake::game::GameConfig;
use q_snake::modes::{HumanMode, TrainConfig, TrainMode, WatchMode};
use q_snake::rl::QLearningConfig;

#[derive(Parser)]
#[command(name = "q_snake")]
#[command(version, about = "Snake with a tabular Q-learning agent")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "train")]
    mode: Mode,

    /// Grid width
    #[arg(long, default_value = "24")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "18")]
    height: usize,

    /// Number of training episodes
    #[arg(long, default_value = "200")]
    episodes: usize,

    /// Learning rate
    #[arg(long, default_value = "0.95")]
    alpha: f32,

    /// Discount factor
    #[arg(long, default_value = "0.9")]
    gamma: f32,

    /// Exploration rate at the start of training
    #[arg(long, default_value = "0.25")]
    epsilon_start: f32,

    /// Exploration rate at the end of training
    #[arg(long, default_value = "0.01")]
    epsilon_stop: f32,

    /// Print training progress every N episodes
    #[arg(long, default_value = "25")]
    log_every: usize,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Train the agent headlessly and print a greedy evaluation
    Train,
    /// Train headlessly, then watch the greedy policy play in the TUI
    Watch,
    /// Play snake with keyboard controls
    Human,
}

impl Cli {
    fn train_config(&self) -> TrainConfig {
        let mut config = TrainConfig::new(self.episodes);
        config.log_frequency = self.log_every;
        config.game_config = GameConfig::new(self.width, self.height);
        config.q_config = QLearningConfig {
            alpha: self.alpha,
            gamma: self.gamma,
            epsilon_start: self.epsilon_start,
            epsilon_stop: self.epsilon_stop,
        };
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.mode {
        Mode::Train => {
            TrainMode::new(cli.train_config()).run();
        }
        Mode::Watch => {
            // The table only lives in-process, so watching always trains
            // first and hands the agent over
            let agent = TrainMode::new(cli.train_config()).run();
            let mut watch_mode = WatchMode::new(agent);
            watch_mode.run().await?;
        }
        Mode::Human => {
            let config = GameConfig::new(cli.width, cli.height);
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}
