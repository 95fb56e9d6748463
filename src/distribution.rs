//! [`Continuations`] are the words seen after a key, paired up with that key in a
//! [`Chain`](crate::Chain). Choosing among them goes through a [`Picker`], so that the randomness
//! can be swapped out for something predictable.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::token::Token;

/// Chooses one index out of `len` options.
///
/// Every random decision made while generating text goes through this trait, so a run is fully
/// determined by the sequence of indices a picker hands out.
pub trait Picker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// A [`Picker`] drawing uniformly from a random number generator.
///
/// ```
/// # use markov_says::{Picker, RandomPicker};
/// # use rand::{rngs::StdRng, SeedableRng};
/// let mut a = RandomPicker::new(StdRng::seed_from_u64(7));
/// let mut b = RandomPicker::new(StdRng::seed_from_u64(7));
/// assert_eq!(a.pick(100), b.pick(100));
/// ```
#[derive(Clone, Debug)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick from zero options");
        Uniform::new(0, len).sample(&mut self.rng)
    }
}

/// A [`Picker`] that replays a fixed list of indices, starting over once it runs out. Each index
/// is reduced modulo the number of options, so any script is valid for any input.
///
/// ```
/// # use markov_says::{Picker, ScriptedPicker};
/// let mut p = ScriptedPicker::new([1, 5]);
/// assert_eq!(p.pick(3), 1);
/// assert_eq!(p.pick(3), 2);
/// assert_eq!(p.pick(3), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            pos: 0,
        }
    }

    /// Always picks the first option.
    pub fn first() -> Self {
        Self::default()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let i = self.script[self.pos % self.script.len()];
        self.pos += 1;
        i % len
    }
}

/// The words observed right after one key, in the order they were seen.
///
/// Duplicates are kept: a word seen three times is three entries, which is what makes it three
/// times as likely to be picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Continuations {
    tokens: Vec<Token>,
}

impl Continuations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an occurrence of this token.
    pub fn push(&mut self, token: &str) {
        self.tokens.push(token.to_string());
    }

    /// Picks one of the continuations, uniformly over the list (with replacement).
    ///
    /// # Panics
    ///
    /// If there are no continuations. A [`Chain`](crate::Chain) never holds an empty list.
    pub fn pick(&self, picker: &mut impl Picker) -> &Token {
        assert!(!self.tokens.is_empty(), "no continuations to pick from");
        &self.tokens[picker.pick(self.tokens.len())]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// How many times `token` was seen.
    pub fn count(&self, token: &str) -> usize {
        self.tokens.iter().filter(|t| *t == token).count()
    }
}
