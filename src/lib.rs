//! Q-Snake - tabular Q-learning for the Snake game
//!
//! This library provides:
//! - Core game logic (game module)
//! - The Q-table, discretizer, and learning agent (rl module)
//! - TUI rendering (render module) and keyboard input (input module)
//! - Training/session statistics (metrics module)
//! - Execution modes: train, watch, human (modes module)
//!
//! The learning core is fully headless; rendering is an optional,
//! observation-only layer used by the watch and human modes.

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rl;
