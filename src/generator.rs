//! Sentence generation on top of a [`Chain`].
//!
//! A sentence is seeded with a random starter (a key whose first word is capitalized) and then
//! grown one step at a time. Each step looks up the last `state_size` words:
//!
//! - if the chain knows them, one of their continuations is appended;
//! - if it does not (a dead end), a fresh random starter is appended instead and generation
//!   carries on from there.
//!
//! Every step advances a cursor by one, no matter which of the two happened. Generation stops
//! once the cursor passes `max_length`, or once it passes `min_length` and the last word ends
//! with a period. Since the cursor always moves, this terminates for any chain.

use std::fmt;

use tracing::{debug, trace};

use crate::chain::Chain;
use crate::distribution::Picker;
use crate::error::{Error, Result};
use crate::token::{self, Token};

/// Length limits for a generated sentence, counted in generation steps (see the module docs).
/// `max_length` is a soft ceiling: a dead end right before it may append a whole starter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_length: usize,
    pub max_length: usize,
}

impl Bounds {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Checks that these bounds make sense for a chain of order `state_size`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `state_size` is zero, `max_length` is below
    /// `state_size`, or `min_length` is above `max_length`.
    pub fn validate(&self, state_size: usize) -> Result<()> {
        if state_size < 1 {
            return Err(Error::invalid("state size must be at least 1"));
        }
        if self.max_length < state_size {
            return Err(Error::invalid(format!(
                "max length {} is below the state size {state_size}",
                self.max_length
            )));
        }
        if self.min_length > self.max_length {
            return Err(Error::invalid(format!(
                "min length {} is above max length {}",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }

    fn is_done(&self, cursor: usize, last: &str) -> bool {
        cursor > self.max_length || (cursor > self.min_length && last.ends_with('.'))
    }
}

/// A finished run of generated words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<Token>,
    steps: usize,
}

impl Sentence {
    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// How many generation steps it took, not counting the initial starter.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_string(self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

impl Chain {
    /// Generates a sentence and returns its words.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfiguration`] if `bounds` do not fit this chain.
    /// - [`Error::EmptyStarterPool`] if no key starts with an uppercase word.
    ///
    /// Both are checked before anything is generated.
    pub fn generate_words(&self, picker: &mut impl Picker, bounds: Bounds) -> Result<Sentence> {
        let state_size = self.state_size();
        bounds.validate(state_size)?;

        let start = self.start_tokens(picker).ok_or(Error::EmptyStarterPool)?;
        let mut words: Vec<Token> = start.to_vec();
        let mut cursor = state_size;
        let mut reseeds = 0_usize;

        loop {
            let key = token::join_key(&words[words.len() - state_size..]);
            match self.generate_next_token(picker, &key) {
                Some(next) => {
                    words.push(next.clone());
                }
                None => {
                    // The pool was non-empty above, so this never errors
                    let start = self.start_tokens(picker).ok_or(Error::EmptyStarterPool)?;
                    trace!(%key, "dead end, appending a new starter");
                    words.extend_from_slice(start);
                    reseeds += 1;
                }
            }
            cursor += 1;

            let last = words.last().map(String::as_str).unwrap_or_default();
            if bounds.is_done(cursor, last) {
                break;
            }
        }

        let steps = cursor - state_size;
        debug!(words = words.len(), steps, reseeds, "generated sentence");
        Ok(Sentence { words, steps })
    }

    /// Generates a sentence, its words joined by single spaces.
    ///
    /// ```
    /// # use markov_says::{Bounds, Chain, ScriptedPicker};
    /// let chain = Chain::from_corpus("Hello world. Hello there. Hello friend.", 1).unwrap();
    /// let mut picker = ScriptedPicker::new([0, 0, 0, 1]);
    /// assert_eq!(
    ///     chain.generate_sentence(&mut picker, Bounds::new(2, 6)).unwrap(),
    ///     "Hello world. Hello there."
    /// );
    /// ```
    pub fn generate_sentence(&self, picker: &mut impl Picker, bounds: Bounds) -> Result<String> {
        Ok(self.generate_words(picker, bounds)?.into_string())
    }
}
