use serde::{Deserialize, Deserializer, Serialize};
use std::{
    collections::HashMap,
    fmt,
    ops::{Index, IndexMut},
};

use super::constants;
use super::state_machine::GamePhase;

/// Truncates user input to [`constants::MAX_USER_INPUT_LENGTH`] without
/// splitting a character in half.
fn truncate_input(s: &mut String) {
    let mut end = constants::MAX_USER_INPUT_LENGTH;
    if s.len() <= end {
        return;
    }
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

/// One of the two competing teams. Used as a tag everywhere; teams have
/// no identity beyond their color.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// How many board words this team must reveal to win. Red goes first
    /// and is compensated with the extra word.
    #[must_use]
    pub const fn word_quota(self) -> usize {
        match self {
            Self::Red => constants::RED_WORD_COUNT,
            Self::Blue => constants::BLUE_WORD_COUNT,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Red => "red",
            Self::Blue => "blue",
        };
        write!(f, "{repr}")
    }
}

/// Opaque player identifier supplied by the host (a chat user id, a
/// terminal nickname, anything). Whitespace is replaced so identifiers
/// stay single tokens in rendered output.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(s: &str) -> Self {
        let mut id: String = s
            .chars()
            .map(|c| if c.is_ascii_whitespace() { '_' } else { c })
            .collect();
        truncate_input(&mut id);
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

/// A board word. Normalized on construction (trimmed, lowercased) so
/// that guesses compare equal to word-list entries regardless of how the
/// host captured them.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Word(String);

impl Word {
    pub fn new(s: &str) -> Self {
        let mut word = s.trim().to_lowercase();
        truncate_input(&mut word);
        Self(word)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<&str> for Word {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Word {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

/// What a board word turns out to be once revealed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Allegiance {
    Red,
    Blue,
    Assassin,
    Bystander,
}

impl Allegiance {
    /// The owning team, if the word belongs to one.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            Self::Red => Some(Team::Red),
            Self::Blue => Some(Team::Blue),
            Self::Assassin | Self::Bystander => None,
        }
    }
}

impl From<Team> for Allegiance {
    fn from(value: Team) -> Self {
        match value {
            Team::Red => Self::Red,
            Team::Blue => Self::Blue,
        }
    }
}

impl fmt::Display for Allegiance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Red => "a red word",
            Self::Blue => "a blue word",
            Self::Assassin => "the assassin",
            Self::Bystander => "a bystander",
        };
        write!(f, "{repr}")
    }
}

/// A pair of values keyed by [`Team`]. Index with a team instead of
/// doing ordinal arithmetic to find "the other side".
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PerTeam<T> {
    pub red: T,
    pub blue: T,
}

impl<T> PerTeam<T> {
    #[must_use]
    pub const fn new(red: T, blue: T) -> Self {
        Self { red, blue }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        [(Team::Red, &self.red), (Team::Blue, &self.blue)].into_iter()
    }
}

impl<T> Index<Team> for PerTeam<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }
}

impl<T> IndexMut<Team> for PerTeam<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        }
    }
}

/// The players who joined one team, in join order, plus that team's
/// designated spymaster. The spymaster is always one of the members.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Roster {
    members: Vec<PlayerId>,
    spymaster: Option<PlayerId>,
}

impl Roster {
    #[must_use]
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.members.contains(player)
    }

    /// Adds a player if absent. Returns whether the roster changed.
    pub(crate) fn add(&mut self, player: &PlayerId) -> bool {
        if self.contains(player) {
            return false;
        }
        self.members.push(player.clone());
        true
    }

    /// Removes a player if present, clearing the spymaster slot when the
    /// departing player held it. Returns whether the roster changed.
    pub(crate) fn remove(&mut self, player: &PlayerId) -> bool {
        let Some(pos) = self.members.iter().position(|m| m == player) else {
            return false;
        };
        self.members.remove(pos);
        if self.spymaster.as_ref() == Some(player) {
            self.spymaster = None;
        }
        true
    }

    pub(crate) fn set_spymaster(&mut self, player: &PlayerId) {
        self.spymaster = Some(player.clone());
    }

    #[must_use]
    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    #[must_use]
    pub fn spymaster(&self) -> Option<&PlayerId> {
        self.spymaster.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Notable things that happened since the host last drained the event
/// queue. Each event renders as a one-line message fit for chat output.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum GameEvent {
    JoinedTeam(PlayerId, Team),
    SpymasterAssigned(PlayerId, Team),
    GameBegan(Team),
    WordRevealed(Word, Allegiance),
    TurnPassed(Team),
    GameEnded(Team),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::JoinedTeam(player, team) => format!("{player} joined the {team} team"),
            Self::SpymasterAssigned(player, team) => {
                format!("{player} is now the {team} spymaster")
            }
            Self::GameBegan(team) => format!("the game began, {team} goes first"),
            Self::WordRevealed(word, allegiance) => {
                format!("{word} was revealed: {allegiance}")
            }
            Self::TurnPassed(team) => format!("it is now the {team} team's turn"),
            Self::GameEnded(team) => format!("the {team} team won"),
        };
        write!(f, "{repr}")
    }
}

/// One board word as seen by a particular viewer. `allegiance` is
/// populated once the word is revealed, or up front in a spymaster's
/// view.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TileView {
    pub word: Word,
    pub revealed: bool,
    pub allegiance: Option<Allegiance>,
}

/// Everything a host needs to render the match for one viewer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameView {
    pub phase: GamePhase,
    pub tiles: Vec<TileView>,
    pub rosters: PerTeam<Roster>,
    /// Unrevealed words left per team; a team wins when it hits zero.
    pub remaining: PerTeam<usize>,
}

/// Per-player views, keyed by player. Spymasters get privileged tiles.
pub type GameViews = HashMap<PlayerId, GameView>;
