//! Codenames game engine - core state machine and game entities.
//!
//! This module provides the match implementation:
//! - Lifecycle state machine (lobby, playing, ended)
//! - Roster management (teams, spymasters)
//! - Guess resolution and win detection
//! - Event generation and per-player views

// Submodules
pub mod constants;
pub mod entities;

mod state_machine;

pub use state_machine::{CodenamesGame, GameError, GamePhase, RevealOutcome};
