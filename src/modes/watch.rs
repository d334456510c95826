//! Watch mode for observing the trained agent
//!
//! Takes an already-trained agent (the table only exists in-process, there
//! is no model file) and displays it playing greedily in the TUI. Playback
//! can be paused, reset, and sped up or down; dead episodes restart on the
//! next tick.
//!
//! # Controls
//!
//! - Space: Pause/unpause
//! - R: Reset episode
//! - 1-4: Speed control (1=slow, 4=very fast)
//! - Q/Esc: Quit

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{stderr, Stderr},
    time::Duration,
};
use tokio::time::{interval, Interval};

use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::rl::QAgent;

/// Playback speed settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSpeed {
    /// 2 Hz (500ms per step)
    Slow,
    /// 8 Hz (125ms per step), same cadence as human play
    Normal,
    /// 20 Hz (50ms per step)
    Fast,
    /// 60 Hz (16ms per step)
    VeryFast,
}

impl PlaybackSpeed {
    /// Tick interval for this speed
    fn tick_interval(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(500),
            Self::Normal => Duration::from_millis(125),
            Self::Fast => Duration::from_millis(50),
            Self::VeryFast => Duration::from_millis(16),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }
}

/// Watch mode: greedy playback of a trained agent in the terminal
pub struct WatchMode {
    /// Trained agent; its table is read-only from here on
    agent: QAgent,

    /// Renderer for the TUI display
    renderer: Renderer,

    /// Session metrics: high score, episodes completed, per-game clock
    metrics: GameMetrics,

    /// Whether to quit the playback loop
    should_quit: bool,

    /// Whether playback is paused
    paused: bool,

    /// Current playback speed
    speed: PlaybackSpeed,

    /// Whether the current episode has ended
    done: bool,
}

impl WatchMode {
    /// Create a new watch mode around a trained agent
    pub fn new(mut agent: QAgent) -> Self {
        agent.reset_env();

        Self {
            agent,
            renderer: Renderer::new(),
            metrics: GameMetrics::new(),
            should_quit: false,
            paused: false,
            speed: PlaybackSpeed::Normal,
            done: false,
        }
    }

    /// Run the playback loop: terminal setup, the select loop, and cleanup
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_playback_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    /// Main playback loop
    async fn run_playback_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game ticks based on speed
        let mut tick_timer = interval(self.speed.tick_interval());

        // Render at 30 FPS
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle keyboard input
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if !self.paused {
                        self.advance_tick();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let status = self.status_line();
                    terminal.draw(|frame| {
                        self.renderer.render_with_status(
                            frame,
                            self.agent.state(),
                            &self.metrics,
                            Some(&status),
                        );
                    }).context("Failed to draw frame")?;
                }

                // Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// One playback tick: step the greedy policy, or restart after a death
    fn advance_tick(&mut self) {
        if self.done {
            self.agent.reset_env();
            self.metrics.on_game_start();
            self.done = false;
            return;
        }

        let (_reward, done) = self.agent.step_greedy();
        if done {
            self.metrics.on_game_over(self.agent.state().score);
            self.done = true;
        }
    }

    /// Handle keyboard events
    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        if let Event::Key(key) = event {
            // Only process key press events
            if key.kind != KeyEventKind::Press {
                return;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('r') => {
                    self.agent.reset_env();
                    self.metrics.on_game_start();
                    self.done = false;
                }
                KeyCode::Char('1') => {
                    self.change_speed(PlaybackSpeed::Slow, tick_timer);
                }
                KeyCode::Char('2') => {
                    self.change_speed(PlaybackSpeed::Normal, tick_timer);
                }
                KeyCode::Char('3') => {
                    self.change_speed(PlaybackSpeed::Fast, tick_timer);
                }
                KeyCode::Char('4') => {
                    self.change_speed(PlaybackSpeed::VeryFast, tick_timer);
                }
                _ => {}
            }
        }
    }

    /// Change the playback speed
    fn change_speed(&mut self, new_speed: PlaybackSpeed, tick_timer: &mut Interval) {
        self.speed = new_speed;
        tick_timer.reset_after(self.speed.tick_interval());
    }

    /// Status line for the footer overlay; the episode counter is the
    /// session's finished-game count plus the one in progress
    fn status_line(&self) -> String {
        let paused = if self.paused { " | PAUSED" } else { "" };
        format!(
            "WATCH | Episode {} | Last score {} | Speed: {}{}",
            self.metrics.games_played + 1,
            self.metrics.last_score,
            self.speed.as_str(),
            paused
        )
    }

    /// Cleanup terminal state
    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::rl::QLearningConfig;

    #[test]
    fn test_playback_speed_intervals() {
        assert_eq!(
            PlaybackSpeed::Slow.tick_interval(),
            Duration::from_millis(500)
        );
        assert_eq!(
            PlaybackSpeed::Normal.tick_interval(),
            Duration::from_millis(125)
        );
        assert_eq!(
            PlaybackSpeed::Fast.tick_interval(),
            Duration::from_millis(50)
        );
        assert_eq!(
            PlaybackSpeed::VeryFast.tick_interval(),
            Duration::from_millis(16)
        );
    }

    #[test]
    fn test_watch_mode_creation() {
        let agent = QAgent::new(QLearningConfig::default(), GameConfig::small());
        let mode = WatchMode::new(agent);

        assert_eq!(mode.metrics.games_played, 0);
        assert!(!mode.paused);
        assert_eq!(mode.speed, PlaybackSpeed::Normal);
    }

    #[test]
    fn test_advance_tick_plays_and_restarts() {
        let agent = QAgent::new(QLearningConfig::default(), GameConfig::small());
        let mut mode = WatchMode::new(agent);

        // An untrained table always goes Forward; within a small grid the
        // snake must hit a wall well before 100 ticks
        for _ in 0..100 {
            mode.advance_tick();
            if mode.done {
                break;
            }
        }
        assert!(mode.done);
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.last_score, mode.agent.state().score);

        // The next tick restarts without counting another game
        mode.advance_tick();
        assert!(!mode.done);
        assert!(mode.agent.state().is_alive);
        assert_eq!(mode.metrics.games_played, 1);
    }
}
