//! Word ladders: turn one word into another by changing a single letter at a
//! time, where every intermediate word must be in the dictionary.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::puzzle::Puzzle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordLadderError {
    #[error("word {0:?} must be non-empty lowercase ascii")]
    InvalidWord(String),
}

/// Words a ladder may step through, shared by every state of one puzzle
pub type Dictionary = Rc<BTreeSet<String>>;

#[derive(Debug, Clone)]
pub struct WordLadderPuzzle {
    from_word: String,
    to_word: String,
    dictionary: Dictionary,
}

fn validate(word: &str) -> Result<(), WordLadderError> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(WordLadderError::InvalidWord(word.to_string()));
    }
    Ok(())
}

impl WordLadderPuzzle {
    pub fn new<I>(from: &str, to: &str, words: I) -> Result<Self, WordLadderError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        validate(from)?;
        validate(to)?;

        let mut dictionary = BTreeSet::new();
        for word in words {
            let word = word.into();
            validate(&word)?;
            dictionary.insert(word);
        }

        Ok(Self {
            from_word: from.to_string(),
            to_word: to.to_string(),
            dictionary: Rc::new(dictionary),
        })
    }

    pub fn from_word(&self) -> &str {
        &self.from_word
    }

    pub fn to_word(&self) -> &str {
        &self.to_word
    }

    fn step_to(&self, word: String) -> Self {
        Self {
            from_word: word,
            to_word: self.to_word.clone(),
            dictionary: Rc::clone(&self.dictionary),
        }
    }
}

impl fmt::Display for WordLadderPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from_word, self.to_word)
    }
}

impl Puzzle for WordLadderPuzzle {
    type Error = Infallible;

    fn fingerprint(&self) -> String {
        self.to_string()
    }

    fn is_solved(&self) -> bool {
        self.from_word == self.to_word
    }

    fn fail_fast(&self) -> bool {
        self.from_word.len() != self.to_word.len()
    }

    fn extensions(&self) -> Result<Vec<Self>, Infallible> {
        let mut extensions = Vec::new();
        let mut letters = self.from_word.clone().into_bytes();

        for i in 0..letters.len() {
            let original = letters[i];
            for letter in b'a'..=b'z' {
                if letter == original {
                    continue;
                }
                letters[i] = letter;
                // Only ascii lowercase is ever written, so this cannot fail.
                if let Ok(word) = std::str::from_utf8(&letters) {
                    if self.dictionary.contains(word) {
                        extensions.push(self.step_to(word.to_string()));
                    }
                }
            }
            letters[i] = original;
        }

        Ok(extensions)
    }
}
