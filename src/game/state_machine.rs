//! Codenames match state machine.
//!
//! One [`CodenamesGame`] owns the full state of a single match: the
//! 25-word board, the team/assassin assignments, the rosters, the reveal
//! log, and the lifecycle phase. Every operation is a synchronous
//! validate-then-apply call; the host serializes concurrent player input
//! before it reaches the engine.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

use super::constants;
use super::entities::{
    Allegiance, GameEvent, GameView, GameViews, PerTeam, PlayerId, Roster, Team, TileView, Word,
};
use crate::words::WordList;

/// Errors that can occur during match operations. All are recoverable:
/// the failed call leaves the match untouched and the host can relay the
/// reason to the acting player.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("word list only has {available} words, need at least {}", constants::BOARD_SIZE)]
    InsufficientWords { available: usize },
    #[error("word list could not be read: {0}")]
    WordListUnavailable(String),
    #[error("not a member of that team")]
    NotOnTeam,
    #[error("not on the team whose turn it is")]
    NotCurrentTeam,
    #[error("that word is not on the board")]
    UnknownWord,
    #[error("that word was already revealed")]
    WordAlreadyRevealed,
    #[error("game has not started")]
    GameNotStarted,
    #[error("game already in progress")]
    GameAlreadyInProgress,
    #[error("game already ended")]
    GameAlreadyEnded,
}

/// Lifecycle of a match. Monotonic: lobby, then playing, then ended.
/// The current team exists only while playing; the winner exists only
/// once ended.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GamePhase {
    Lobby,
    Playing { current_team: Team },
    Ended { winner: Team },
}

/// What a successful reveal did to the match, so the host knows what to
/// re-render.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RevealOutcome {
    /// Own-team word; the guessing team keeps the turn and has
    /// `remaining` words left to win.
    Correct { team: Team, remaining: usize },
    /// Neither team's word; recorded in the reveal log, nothing else
    /// changes.
    Bystander,
    /// Opposing-team word; the turn passed to them.
    TurnPassed { to: Team },
    /// The match just ended.
    GameOver { winner: Team },
}

/// A single Codenames match with the data and logic to run it end to
/// end, from lobby to a winner.
#[derive(Clone, Debug)]
pub struct CodenamesGame {
    /// The 25 board words, in deal order. Immutable after construction.
    board: Vec<Word>,
    /// The 9 red and 8 blue word assignments. Disjoint from each other
    /// and from the assassin word by construction.
    team_words: PerTeam<HashSet<Word>>,
    assassin_word: Word,
    /// Words guessed so far, in guess order. Duplicate-free; membership
    /// drives the win check.
    revealed: Vec<Word>,
    rosters: PerTeam<Roster>,
    phase: GamePhase,
    /// Queue of game updates for the host to render, drained via
    /// [`CodenamesGame::drain_events`].
    events: VecDeque<GameEvent>,
}

impl CodenamesGame {
    /// Deals a new match from the given word source: 25 distinct words,
    /// of which 9 become red, 8 blue, 1 the assassin, and 7 bystanders.
    /// The match starts in the lobby; red takes the first turn once the
    /// game begins.
    pub fn new(words: &WordList) -> Result<Self, GameError> {
        let board = words.sample(constants::BOARD_SIZE)?;

        let mut indices: Vec<usize> = (0..constants::BOARD_SIZE).collect();
        indices.shuffle(&mut rand::rng());

        let red_end = constants::RED_WORD_COUNT;
        let blue_end = red_end + constants::BLUE_WORD_COUNT;
        let red: HashSet<Word> = indices[..red_end].iter().map(|&i| board[i].clone()).collect();
        let blue: HashSet<Word> = indices[red_end..blue_end]
            .iter()
            .map(|&i| board[i].clone())
            .collect();
        let assassin_word = board[indices[blue_end]].clone();

        log::info!(
            "dealt a new board: {} words, {} red, {} blue",
            constants::BOARD_SIZE,
            constants::RED_WORD_COUNT,
            constants::BLUE_WORD_COUNT,
        );

        Ok(Self {
            board,
            team_words: PerTeam::new(red, blue),
            assassin_word,
            revealed: Vec::with_capacity(constants::BOARD_SIZE),
            rosters: PerTeam::default(),
            phase: GamePhase::Lobby,
            events: VecDeque::new(),
        })
    }

    // === Lobby & roster operations ===

    /// Adds a player to a team, leaving the other team if needed. A
    /// player belongs to at most one roster; switching teams also gives
    /// up a spymaster slot held on the team being left. Idempotent:
    /// returns whether the roster actually changed. Allowed mid-game,
    /// rejected once the match has ended.
    pub fn join_team(&mut self, player: &PlayerId, team: Team) -> Result<bool, GameError> {
        self.reject_if_ended()?;

        let joined = self.rosters[team].add(player);
        self.rosters[team.opponent()].remove(player);
        if joined {
            self.push_event(GameEvent::JoinedTeam(player.clone(), team));
        }
        Ok(joined)
    }

    /// Makes a player their team's spymaster, replacing any previous
    /// one. Fails with [`GameError::NotOnTeam`] when the player has not
    /// joined that team.
    pub fn become_spymaster(&mut self, player: &PlayerId, team: Team) -> Result<(), GameError> {
        self.reject_if_ended()?;

        if !self.rosters[team].contains(player) {
            return Err(GameError::NotOnTeam);
        }
        self.rosters[team].set_spymaster(player);
        self.push_event(GameEvent::SpymasterAssigned(player.clone(), team));
        Ok(())
    }

    /// Moves the match from the lobby into play. Red goes first.
    pub fn begin_game(&mut self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Lobby => {
                self.phase = GamePhase::Playing {
                    current_team: Team::Red,
                };
                log::info!("match started, red goes first");
                self.push_event(GameEvent::GameBegan(Team::Red));
                Ok(())
            }
            GamePhase::Playing { .. } => Err(GameError::GameAlreadyInProgress),
            GamePhase::Ended { .. } => Err(GameError::GameAlreadyEnded),
        }
    }

    // === Play operations ===

    /// Resolves one guess. Preconditions are checked in order: the match
    /// must be in play, the player must be on the team whose turn it is,
    /// the word must be on the board and not yet revealed. The word is
    /// then recorded and resolved: an own-team word keeps the turn (and
    /// wins the match if it was the team's last), an opposing-team word
    /// passes the turn (or hands the opponent the win if it completed
    /// their set), the assassin ends the match for the opponent, and a
    /// bystander changes nothing beyond the log.
    pub fn reveal(&mut self, player: &PlayerId, word: &Word) -> Result<RevealOutcome, GameError> {
        let team = match self.phase {
            GamePhase::Lobby => return Err(GameError::GameNotStarted),
            GamePhase::Ended { .. } => return Err(GameError::GameAlreadyEnded),
            GamePhase::Playing { current_team } => current_team,
        };
        if !self.rosters[team].contains(player) {
            return Err(GameError::NotCurrentTeam);
        }
        if !self.board.contains(word) {
            return Err(GameError::UnknownWord);
        }
        if self.revealed.contains(word) {
            return Err(GameError::WordAlreadyRevealed);
        }

        let allegiance = self.allegiance_of(word);
        self.revealed.push(word.clone());
        log::debug!("{player} revealed {word} ({allegiance})");
        self.push_event(GameEvent::WordRevealed(word.clone(), allegiance));

        let outcome = match allegiance.team() {
            Some(owner) if owner == team => {
                let remaining = self.remaining(team);
                if remaining == 0 {
                    self.finish(team)
                } else {
                    RevealOutcome::Correct { team, remaining }
                }
            }
            Some(opponent) => {
                if self.remaining(opponent) == 0 {
                    self.finish(opponent)
                } else {
                    self.pass_turn_to(opponent)
                }
            }
            None if allegiance == Allegiance::Assassin => self.finish(team.opponent()),
            None => RevealOutcome::Bystander,
        };
        Ok(outcome)
    }

    /// Passes the turn to the other team. Returns the team now up.
    pub fn end_turn(&mut self) -> Result<Team, GameError> {
        match self.phase {
            GamePhase::Lobby => Err(GameError::GameNotStarted),
            GamePhase::Ended { .. } => Err(GameError::GameAlreadyEnded),
            GamePhase::Playing { current_team } => {
                let next = current_team.opponent();
                self.pass_turn_to(next);
                Ok(next)
            }
        }
    }

    /// Ends the match with the given winner. For host-driven
    /// terminations (session timeout, forfeit); the engine ends matches
    /// itself through [`CodenamesGame::reveal`].
    pub fn end_game(&mut self, winner: Team) -> Result<(), GameError> {
        self.reject_if_ended()?;
        self.finish(winner);
        Ok(())
    }

    // === Read surface ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The team whose turn it is, while the match is in play.
    #[must_use]
    pub fn current_team(&self) -> Option<Team> {
        match self.phase {
            GamePhase::Playing { current_team } => Some(current_team),
            GamePhase::Lobby | GamePhase::Ended { .. } => None,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        match self.phase {
            GamePhase::Ended { winner } => Some(winner),
            GamePhase::Lobby | GamePhase::Playing { .. } => None,
        }
    }

    /// The board words in deal order.
    #[must_use]
    pub fn board(&self) -> &[Word] {
        &self.board
    }

    /// Words guessed so far, in guess order.
    #[must_use]
    pub fn revealed_words(&self) -> &[Word] {
        &self.revealed
    }

    #[must_use]
    pub fn is_revealed(&self, word: &Word) -> bool {
        self.revealed.contains(word)
    }

    #[must_use]
    pub fn roster(&self, team: Team) -> &Roster {
        &self.rosters[team]
    }

    #[must_use]
    pub fn spymaster(&self, team: Team) -> Option<&PlayerId> {
        self.rosters[team].spymaster()
    }

    /// Unrevealed words a team still needs to win.
    #[must_use]
    pub fn remaining(&self, team: Team) -> usize {
        team.word_quota().saturating_sub(self.revealed_count(team))
    }

    /// Builds one view per rostered player. Spymasters see every word's
    /// allegiance; everyone else sees allegiances only on revealed words
    /// (or the whole board once the match has ended).
    ///
    /// # Important
    /// This function's return value should be used - ignoring it wastes
    /// computation
    #[must_use]
    pub fn get_views(&self) -> GameViews {
        let mut views = GameViews::new();
        for (_, roster) in self.rosters.iter() {
            for player in roster.members() {
                let privileged = roster.spymaster() == Some(player);
                views.insert(player.clone(), self.view(privileged));
            }
        }
        views
    }

    /// The unprivileged view for anyone not on a roster.
    #[must_use]
    pub fn spectator_view(&self) -> GameView {
        self.view(false)
    }

    /// Empties and returns the queue of renderable game updates.
    pub fn drain_events(&mut self) -> VecDeque<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Internals ===

    fn view(&self, privileged: bool) -> GameView {
        let ended = matches!(self.phase, GamePhase::Ended { .. });
        let tiles = self
            .board
            .iter()
            .map(|word| {
                let revealed = self.revealed.contains(word);
                let allegiance =
                    (revealed || privileged || ended).then(|| self.allegiance_of(word));
                TileView {
                    word: word.clone(),
                    revealed,
                    allegiance,
                }
            })
            .collect();
        GameView {
            phase: self.phase,
            tiles,
            rosters: self.rosters.clone(),
            remaining: PerTeam::new(self.remaining(Team::Red), self.remaining(Team::Blue)),
        }
    }

    fn allegiance_of(&self, word: &Word) -> Allegiance {
        if self.team_words[Team::Red].contains(word) {
            Allegiance::Red
        } else if self.team_words[Team::Blue].contains(word) {
            Allegiance::Blue
        } else if *word == self.assassin_word {
            Allegiance::Assassin
        } else {
            Allegiance::Bystander
        }
    }

    fn revealed_count(&self, team: Team) -> usize {
        self.revealed
            .iter()
            .filter(|word| self.team_words[team].contains(word))
            .count()
    }

    fn pass_turn_to(&mut self, to: Team) -> RevealOutcome {
        self.phase = GamePhase::Playing { current_team: to };
        self.push_event(GameEvent::TurnPassed(to));
        RevealOutcome::TurnPassed { to }
    }

    fn finish(&mut self, winner: Team) -> RevealOutcome {
        self.phase = GamePhase::Ended { winner };
        log::info!("match over, {winner} wins");
        self.push_event(GameEvent::GameEnded(winner));
        RevealOutcome::GameOver { winner }
    }

    fn reject_if_ended(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Ended { .. } => Err(GameError::GameAlreadyEnded),
            GamePhase::Lobby | GamePhase::Playing { .. } => Ok(()),
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}
