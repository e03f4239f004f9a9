//! Property-based tests for board dealing and match invariants using
//! proptest.
//!
//! These verify that the board partition, roster exclusivity, and
//! reveal-log invariants hold across a wide range of generated word
//! lists and action sequences.

use codenames::{
    Allegiance, CodenamesGame, GameError, GamePhase, PlayerId, Team, Word, WordList,
};
use proptest::prelude::*;
use std::collections::HashSet;

// Strategy to generate a word list with enough unique entries to deal a
// board. Lowercase entries survive normalization unchanged, so the set
// stays unique inside the list.
fn word_list_strategy() -> impl Strategy<Value = WordList> {
    prop::collection::hash_set("[a-z]{3,10}", 25..60).prop_map(WordList::from_words)
}

// Strategy for an arbitrary sequence of join actions over a small pool
// of players.
fn join_sequence_strategy() -> impl Strategy<Value = Vec<(u8, bool)>> {
    prop::collection::vec((0u8..6, any::<bool>()), 0..40)
}

fn player(i: u8) -> PlayerId {
    PlayerId::new(&format!("player{i}"))
}

// Helper to read the full partition out of a spymaster view.
fn partition(game: &CodenamesGame, spymaster: &PlayerId, allegiance: Allegiance) -> Vec<Word> {
    game.get_views()[spymaster]
        .tiles
        .iter()
        .filter(|tile| tile.allegiance == Some(allegiance))
        .map(|tile| tile.word.clone())
        .collect()
}

proptest! {
    #[test]
    fn test_board_partition_holds_for_any_source(words in word_list_strategy()) {
        let mut game = CodenamesGame::new(&words).unwrap();
        let spy = player(0);
        game.join_team(&spy, Team::Red).unwrap();
        game.become_spymaster(&spy, Team::Red).unwrap();

        let board: HashSet<Word> = game.board().iter().cloned().collect();
        prop_assert_eq!(game.board().len(), 25, "board is always dealt at exactly 25 words");
        prop_assert_eq!(board.len(), 25, "board words are unique");

        let red = partition(&game, &spy, Allegiance::Red);
        let blue = partition(&game, &spy, Allegiance::Blue);
        let assassin = partition(&game, &spy, Allegiance::Assassin);
        let bystanders = partition(&game, &spy, Allegiance::Bystander);

        prop_assert_eq!(red.len(), 9);
        prop_assert_eq!(blue.len(), 8);
        prop_assert_eq!(assassin.len(), 1);
        prop_assert_eq!(bystanders.len(), 7);

        for word in red.iter().chain(&blue).chain(&assassin).chain(&bystanders) {
            prop_assert!(board.contains(word), "every assigned word is on the board");
            prop_assert!(words.contains(word), "every board word comes from the source");
        }
    }

    #[test]
    fn test_no_player_is_ever_on_both_rosters(
        words in word_list_strategy(),
        joins in join_sequence_strategy(),
    ) {
        let mut game = CodenamesGame::new(&words).unwrap();

        for (i, red_side) in joins {
            let team = if red_side { Team::Red } else { Team::Blue };
            game.join_team(&player(i), team).unwrap();
        }

        for i in 0..6 {
            let p = player(i);
            let on_red = game.roster(Team::Red).contains(&p);
            let on_blue = game.roster(Team::Blue).contains(&p);
            prop_assert!(!(on_red && on_blue), "player{} is on both rosters", i);
        }
    }

    #[test]
    fn test_reveal_log_and_phase_invariants(
        words in word_list_strategy(),
        guesses in prop::collection::vec(0usize..25, 1..60),
    ) {
        let mut game = CodenamesGame::new(&words).unwrap();
        let red = player(0);
        let blue = player(1);
        game.join_team(&red, Team::Red).unwrap();
        game.join_team(&blue, Team::Blue).unwrap();
        game.begin_game().unwrap();

        for idx in guesses {
            let word = game.board()[idx].clone();
            let guesser = match game.current_team() {
                Some(Team::Red) => &red,
                Some(Team::Blue) => &blue,
                // Terminal; every further action must be rejected.
                None => {
                    prop_assert!(game.winner().is_some());
                    prop_assert_eq!(
                        game.reveal(&red, &word).unwrap_err(),
                        GameError::GameAlreadyEnded,
                    );
                    break;
                }
            };
            match game.reveal(guesser, &word) {
                Ok(_) | Err(GameError::WordAlreadyRevealed) => {}
                Err(other) => prop_assert!(false, "unexpected reveal error: {}", other),
            }
        }

        // The reveal log never repeats a word and never outgrows the board.
        let revealed: HashSet<Word> = game.revealed_words().iter().cloned().collect();
        prop_assert_eq!(revealed.len(), game.revealed_words().len());
        prop_assert!(game.revealed_words().len() <= 25);

        // Winner exists exactly when the match has ended.
        match game.phase() {
            GamePhase::Ended { winner } => prop_assert_eq!(game.winner(), Some(winner)),
            GamePhase::Lobby | GamePhase::Playing { .. } => {
                prop_assert_eq!(game.winner(), None);
            }
        }
    }
}
