//! Fixed parameters of a Codenames match.
//!
//! The board layout is not configurable: every match deals 25 words,
//! assigns 9 to red, 8 to blue, and 1 to the assassin, leaving 7
//! bystanders.

/// Number of words dealt onto the board at the start of a match.
pub const BOARD_SIZE: usize = 25;

/// Number of board words assigned to the red team. Red goes first and
/// gets the extra word in compensation.
pub const RED_WORD_COUNT: usize = 9;

/// Number of board words assigned to the blue team.
pub const BLUE_WORD_COUNT: usize = 8;

/// Number of assassin words on the board.
pub const ASSASSIN_WORD_COUNT: usize = 1;

/// Number of bystander words left over once both teams and the assassin
/// have their assignments.
pub const BYSTANDER_WORD_COUNT: usize =
    BOARD_SIZE - RED_WORD_COUNT - BLUE_WORD_COUNT - ASSASSIN_WORD_COUNT;

/// Maximum accepted length for user-supplied input (player identifiers
/// and words). Longer input is truncated on construction.
pub const MAX_USER_INPUT_LENGTH: usize = 64;
