//! Word sources for dealing boards.
//!
//! The engine's only requirement of a word source is that it can hand
//! over 25 unique words. [`WordList`] satisfies that from any iterator,
//! newline-delimited text, reader, or file, and ships a default list so
//! hosts can run a match with no setup at all.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::game::GameError;
use crate::game::entities::Word;

/// The word list shipped with the crate (`data/words.txt`).
const DEFAULT_WORDS: &str = include_str!("../data/words.txt");

/// An ordered, deduplicated collection of candidate board words.
///
/// Entries are normalized through [`Word::new`] on the way in, so a list
/// built from a ragged text file still compares cleanly against player
/// guesses. Duplicates and blank lines are dropped.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        let mut list: Vec<Word> = Vec::new();
        for word in words {
            let word = word.into();
            if word.is_empty() || list.contains(&word) {
                continue;
            }
            list.push(word);
        }
        Self { words: list }
    }

    /// Parses newline-delimited text, one candidate word per line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, GameError> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| GameError::WordListUnavailable(e.to_string()))?;
            lines.push(line);
        }
        Ok(Self::from_words(lines))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let file = File::open(path).map_err(|e| GameError::WordListUnavailable(e.to_string()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Draws `n` distinct words at random, without replacement.
    pub fn sample(&self, n: usize) -> Result<Vec<Word>, GameError> {
        if self.words.len() < n {
            return Err(GameError::InsufficientWords {
                available: self.words.len(),
            });
        }
        let mut rng = rand::rng();
        Ok(self.words.choose_multiple(&mut rng, n).cloned().collect())
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::from_text(DEFAULT_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants;
    use std::collections::HashSet;

    #[test]
    fn test_from_text_skips_blanks_and_duplicates() {
        let list = WordList::from_text("crane\n\n  CRANE  \nmole\n\nmole\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains(&Word::new("crane")));
        assert!(list.contains(&Word::new("mole")));
    }

    #[test]
    fn test_entries_are_normalized() {
        let list = WordList::from_text("  New York \n");
        assert!(list.contains(&Word::new("new york")));
    }

    #[test]
    fn test_default_list_can_deal_a_board() {
        let list = WordList::default();
        assert!(list.len() >= constants::BOARD_SIZE);
    }

    #[test]
    fn test_sample_rejects_short_lists() {
        let list = WordList::from_text("a\nb\nc\n");
        assert_eq!(
            list.sample(constants::BOARD_SIZE).unwrap_err(),
            GameError::InsufficientWords { available: 3 },
        );
    }

    #[test]
    fn test_sample_draws_distinct_words_from_the_list() {
        let list = WordList::default();
        let sampled = list.sample(constants::BOARD_SIZE).unwrap();

        assert_eq!(sampled.len(), constants::BOARD_SIZE);
        let unique: HashSet<&Word> = sampled.iter().collect();
        assert_eq!(unique.len(), constants::BOARD_SIZE);
        for word in &sampled {
            assert!(list.contains(word));
        }
    }

    #[test]
    fn test_from_reader() {
        let list = WordList::from_reader("crane\nmole\n".as_bytes()).unwrap();
        assert_eq!(list.len(), 2);
    }
}
