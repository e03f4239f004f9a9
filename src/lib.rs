//! # Codenames
//!
//! A Codenames party-game engine: one match, two teams, a 5x5 board of
//! words, and an assassin nobody wants to find.
//!
//! The engine owns all game state and enforces the rules of a single
//! match (word assignment, team membership, turn order, guess
//! resolution, win detection). It is invoked synchronously by a host - a
//! chat bot, a CLI, a test harness - that supplies player identities and
//! actions and renders the results. The engine has no internal
//! concurrency; a host embedding several simultaneous matches gives each
//! its own [`CodenamesGame`].
//!
//! ## Architecture
//!
//! A match moves through three phases, never backwards:
//!
//! - **Lobby**: players join teams and claim spymaster seats
//! - **Playing**: teams take turns guessing words
//! - **Ended**: a team completed its words, or someone hit the assassin
//!
//! Every board is 25 words: 9 red, 8 blue, 1 assassin, 7 bystanders.
//! Red goes first.
//!
//! ## Core Modules
//!
//! - [`game`]: match state machine, entities, events, and views
//! - [`words`]: word sources for dealing boards
//!
//! ## Example
//!
//! ```
//! use codenames::{CodenamesGame, PlayerId, Team, WordList};
//!
//! let mut game = CodenamesGame::new(&WordList::default())?;
//!
//! let alice = PlayerId::new("alice");
//! let bob = PlayerId::new("bob");
//! game.join_team(&alice, Team::Red)?;
//! game.join_team(&bob, Team::Blue)?;
//! game.become_spymaster(&alice, Team::Red)?;
//!
//! game.begin_game()?;
//! assert_eq!(game.current_team(), Some(Team::Red));
//! # Ok::<(), codenames::GameError>(())
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    CodenamesGame, GameError, GamePhase, RevealOutcome,
    constants::{self, BLUE_WORD_COUNT, BOARD_SIZE, RED_WORD_COUNT},
    entities::{
        self, Allegiance, GameEvent, GameView, GameViews, PerTeam, PlayerId, Roster, Team,
        TileView, Word,
    },
};

/// Word sources for dealing boards.
pub mod words;
pub use words::WordList;
