//! Sentence generation using word-level markov chains, for putting words in the mouths of meme
//! templates.
//!
//! A [`Chain`] of order `n` maps every run of `n` consecutive words in a corpus to the words seen
//! right after it. Words are whitespace-delimited and keep their punctuation, so `"end."` and
//! `"end"` are different words. How likely a continuation is depends only on how often it was
//! seen: every occurrence is kept, and picking is uniform over all of them.
//!
//! Sentences start from a key whose first word is capitalized, and stop at a word ending in a
//! period (once they are long enough) or when they get too long. When generation reaches a key
//! the corpus never continued, it appends a new capitalized start and carries on instead of
//! giving up. See [`generator`] for the details.
//!
//! All randomness goes through a [`Picker`]. Use [`RandomPicker`] for actual randomness, or
//! [`ScriptedPicker`] to decide every choice up front.
//!
//! ```
//! # use markov_says::{build_model, generate_text, RandomPicker};
//! # use rand::thread_rng;
//! let chain = build_model("Hello world. Hello there. Hello friend.", 1).unwrap();
//! let text = generate_text(&chain, 1, 2, 6, &mut RandomPicker::new(thread_rng())).unwrap();
//! assert!(text.starts_with("Hello"));
//! ```

pub mod caption;
pub mod chain;
pub mod config;
pub mod corpus;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod token;

pub use chain::{Chain, ChainBuilder};
pub use distribution::{Continuations, Picker, RandomPicker, ScriptedPicker};
pub use error::{Error, Result};
pub use generator::{Bounds, Sentence};

/// Builds a chain of order `state_size` from `corpus`.
///
/// A corpus with no more than `state_size` words gives an empty chain.
///
/// # Errors
///
/// [`Error::InvalidConfiguration`] if `state_size` is zero.
pub fn build_model(corpus: &str, state_size: usize) -> Result<Chain> {
    Chain::from_corpus(corpus, state_size)
}

/// Generates one sentence from `chain`, with words joined by single spaces.
///
/// ```
/// # use markov_says::{build_model, generate_text, Error, ScriptedPicker};
/// let chain = build_model("a b c b a", 1).unwrap();
/// assert!(matches!(
///     generate_text(&chain, 1, 2, 6, &mut ScriptedPicker::first()),
///     Err(Error::EmptyStarterPool)
/// ));
/// ```
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`] if `state_size` is not the order of `chain`, or the length
///   bounds are out of range (see [`Bounds::validate()`]).
/// - [`Error::EmptyStarterPool`] if no key of `chain` starts with an uppercase word.
pub fn generate_text(
    chain: &Chain,
    state_size: usize,
    min_length: usize,
    max_length: usize,
    picker: &mut impl Picker,
) -> Result<String> {
    let bounds = Bounds::new(min_length, max_length);
    bounds.validate(state_size)?;
    if state_size != chain.state_size() {
        return Err(Error::InvalidConfiguration(format!(
            "state size {state_size} does not match the chain's order {}",
            chain.state_size()
        )));
    }
    chain.generate_sentence(picker, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_end_to_end() {
        let chain = build_model("Hello world. Hello there. Hello friend.", 1).unwrap();
        let text = generate_text(&chain, 1, 2, 6, &mut ScriptedPicker::new([0, 0, 0, 1])).unwrap();
        assert_eq!(text, "Hello world. Hello there.");
    }

    #[test]
    fn mismatched_state_size() {
        let chain = build_model("One two three. Four five six.", 2).unwrap();
        assert!(matches!(
            generate_text(&chain, 1, 2, 6, &mut ScriptedPicker::first()),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(generate_text(&chain, 2, 2, 6, &mut ScriptedPicker::first()).is_ok());
    }

    #[test]
    fn zero_state_size() {
        assert!(matches!(
            build_model("Some text", 0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn short_corpus_fails_to_generate() {
        let chain = build_model("Hi", 1).unwrap();
        assert!(chain.is_empty());
        assert!(matches!(
            generate_text(&chain, 1, 0, 3, &mut ScriptedPicker::first()),
            Err(Error::EmptyStarterPool)
        ));
    }
}
