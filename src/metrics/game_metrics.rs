use std::time::{Duration, Instant};

/// Session statistics for the TUI modes
///
/// One instance spans every game played in a session, whether steered by
/// the keyboard or by the greedy policy. The clock restarts with each game;
/// the score aggregates (high score, last score, session mean) accumulate
/// until the process exits.
pub struct GameMetrics {
    game_start: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub last_score: u32,
    pub games_played: u32,
    total_score: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            game_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            last_score: 0,
            games_played: 0,
            total_score: 0,
        }
    }

    /// Refresh the elapsed clock; called once per rendered frame
    pub fn update(&mut self) {
        self.elapsed_time = self.game_start.elapsed();
    }

    /// Restart the per-game clock
    pub fn on_game_start(&mut self) {
        self.game_start = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Fold a finished game into the session aggregates
    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.last_score = final_score;
        self.total_score += final_score;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Mean score over the finished games of this session, 0.0 before the
    /// first game ends
    pub fn mean_score(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f32 / self.games_played as f32
        }
    }

    /// Elapsed time of the current game as `MM:SS`
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_score_aggregates() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.mean_score(), 0.0);

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.last_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(4);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.last_score, 4);
        assert_eq!(metrics.games_played, 2);
        assert!((metrics.mean_score() - 7.0).abs() < 1e-5);

        metrics.on_game_over(16);
        assert_eq!(metrics.high_score, 16);
        assert!((metrics.mean_score() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
