//! See the top level crate documentation for information about the [`Chain`] type.

use hashbrown::HashMap;
use tracing::debug;

use crate::distribution::{Continuations, Picker};
use crate::error::{Error, Result};
use crate::token::{self, Token, TokenRef};

/// Markov chain over words, of any order. The order (`state_size`) is how many consecutive words
/// make up one key.
///
/// ```
/// # use markov_says::{Chain, ScriptedPicker};
/// let chain = Chain::from_corpus("Hello world. Hello there.", 1).unwrap();
///
/// assert_eq!(chain.continuations("Hello").unwrap().as_slice(), ["world.", "there."]);
/// assert_eq!(
///     chain.generate_next_token(&mut ScriptedPicker::new([1]), "Hello").map(String::as_str),
///     Some("there.")
/// );
///
/// // The last word of the corpus was never followed by anything
/// assert!(chain.continuations("there.").is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    state_size: usize,
    map: HashMap<Token, Continuations>,
    /// Keys in the order they were first seen.
    keys: Vec<Token>,
    /// Keys starting with an uppercase word, split back into words, in the order they were
    /// first seen.
    starters: Vec<Vec<Token>>,
}

impl Chain {
    /// Starts building a chain of order `state_size`.
    pub fn builder(state_size: usize) -> Result<ChainBuilder> {
        ChainBuilder::new(state_size)
    }

    /// Builds a chain of order `state_size` from a whole corpus in one go.
    ///
    /// A corpus with `state_size` words or fewer gives an empty chain. That is not an error
    /// here, but generating from it is.
    pub fn from_corpus(corpus: &str, state_size: usize) -> Result<Self> {
        let mut cb = ChainBuilder::new(state_size)?;
        cb.feed_str(corpus);
        Ok(cb.build())
    }

    pub fn state_size(&self) -> usize {
        self.state_size
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All keys, in the order they were first seen.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// The words seen after `key`, or `None` if `key` was never seen with a successor.
    pub fn continuations(&self, key: &str) -> Option<&Continuations> {
        self.map.get(key)
    }

    /// Every key that can start a sentence, split into its words.
    pub fn starters(&self) -> &[Vec<Token>] {
        &self.starters
    }

    /// Picks a key that can start a sentence. If the chain has no key starting with an uppercase
    /// word, `None` is returned.
    pub fn start_tokens(&self, picker: &mut impl Picker) -> Option<&[Token]> {
        if self.starters.is_empty() {
            return None;
        }
        Some(&self.starters[picker.pick(self.starters.len())])
    }

    /// Generates a new token following `key`.
    ///
    /// If the chain has never seen `key`, `None` is returned.
    pub fn generate_next_token(&self, picker: &mut impl Picker, key: &str) -> Option<&Token> {
        Some(self.map.get(key)?.pick(picker))
    }
}

/// Builds a [`Chain`] by being fed text and recording, for every window of `state_size` words,
/// which word came right after it.
#[derive(Clone, Debug)]
pub struct ChainBuilder {
    state_size: usize,
    map: HashMap<Token, Continuations>,
    keys: Vec<Token>,
}

impl ChainBuilder {
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `state_size` is zero.
    pub fn new(state_size: usize) -> Result<Self> {
        if state_size < 1 {
            return Err(Error::invalid("state size must be at least 1"));
        }
        Ok(Self {
            state_size,
            map: HashMap::new(),
            keys: Vec::new(),
        })
    }

    pub fn state_size(&self) -> usize {
        self.state_size
    }

    /// Uses up the builder and creates a new chain. A builder that never saw a full window
    /// creates an empty chain.
    pub fn build(self) -> Chain {
        let starters: Vec<Vec<Token>> = self
            .keys
            .iter()
            .filter(|k| token::is_starter(k))
            .map(|k| token::split_key(k))
            .collect();

        debug!(
            state_size = self.state_size,
            keys = self.keys.len(),
            starters = starters.len(),
            "built chain"
        );

        Chain {
            state_size: self.state_size,
            map: self.map,
            keys: self.keys,
            starters,
        }
    }

    /// Add the occurrence of `next` following the words in `prev`.
    ///
    /// # Panics
    ///
    /// If `prev` does not hold exactly `state_size` words.
    pub fn add_occurrence<S: AsRef<str>>(&mut self, prev: &[S], next: &str) {
        assert_eq!(
            prev.len(),
            self.state_size,
            "key must have exactly state_size words"
        );
        let key = token::join_key(prev);
        match self.map.get_mut(&key) {
            Some(c) => {
                c.push(next);
            }
            None => {
                let mut c = Continuations::new();
                c.push(next);
                self.keys.push(key.clone());
                self.map.insert(key, c);
            }
        }
    }

    /// Feeds already split tokens. Windows never span two separate feeds.
    pub fn feed_tokens(&mut self, tokens: &[TokenRef<'_>]) {
        for window in tokens.windows(self.state_size + 1) {
            let (prev, next) = window.split_at(self.state_size);
            self.add_occurrence(prev, next[0]);
        }
    }

    /// Feeds the chain builder with more text, split on whitespace (see
    /// [`tokenize()`](crate::token::tokenize)).
    pub fn feed_str(&mut self, content: &str) {
        let tokens: Vec<TokenRef<'_>> = token::tokenize(content).collect();
        self.feed_tokens(&tokens);
    }
}

#[cfg(test)]
mod tests {
    use crate::distribution::ScriptedPicker;
    use crate::{Chain, ChainBuilder, Error};

    const FORTUNE: &str = r#"
Coach: How's it going, Norm?
Norm:  Daddy's rich and Momma's good lookin'.
                -- Cheers, Truce or Consequences

Sam:   What's up, Norm?
Norm:  My nipples.  It's freezing out there.
                -- Cheers, Coach Returns to Action
"#;

    fn continuations<'a>(chain: &'a Chain, key: &str) -> Vec<&'a str> {
        chain
            .continuations(key)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn zero_state_size_is_rejected() {
        assert!(matches!(
            ChainBuilder::new(0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(Chain::from_corpus("Some words", 0).is_err());
    }

    #[test]
    fn empty_chain_builder_builds_empty_chain() {
        let chain = Chain::builder(2).unwrap().build();
        assert!(chain.is_empty());
        assert!(chain.starters().is_empty());
    }

    #[test]
    fn corpus_no_longer_than_state_size_is_empty() {
        assert!(Chain::from_corpus("One two", 2).unwrap().is_empty());
        assert!(Chain::from_corpus("One", 2).unwrap().is_empty());
        assert!(Chain::from_corpus("   ", 1).unwrap().is_empty());
        assert_eq!(Chain::from_corpus("One two three", 2).unwrap().len(), 1);
    }

    #[test]
    fn hello_world_table() {
        let chain = Chain::from_corpus("Hello world. Hello there. Hello friend.", 1).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(
            continuations(&chain, "Hello"),
            vec!["world.", "there.", "friend."]
        );
        assert_eq!(continuations(&chain, "world."), vec!["Hello"]);
        assert_eq!(continuations(&chain, "there."), vec!["Hello"]);
        assert!(chain.continuations("friend.").is_none());
        assert_eq!(chain.starters(), [vec!["Hello".to_string()]]);
    }

    #[test]
    fn second_order_keys_are_space_joined() {
        let chain = Chain::from_corpus("the cat sat\n\n the  cat ran", 2).unwrap();
        assert_eq!(
            chain.keys().collect::<Vec<_>>(),
            vec!["the cat", "cat sat", "sat the"]
        );
        assert_eq!(continuations(&chain, "the cat"), vec!["sat", "ran"]);
        assert!(chain.starters().is_empty());
    }

    #[test]
    fn tokens_are_case_and_punctuation_sensitive() {
        let chain = Chain::from_corpus("Word word word. Word", 1).unwrap();
        assert_eq!(continuations(&chain, "Word"), vec!["word"]);
        assert_eq!(continuations(&chain, "word"), vec!["word."]);
        assert_eq!(continuations(&chain, "word."), vec!["Word"]);
    }

    #[test]
    fn starters_keep_first_seen_order() {
        let chain = Chain::from_corpus("Bob saw Alice. Alice saw Bob.", 2).unwrap();
        let starters: Vec<String> = chain.starters().iter().map(|s| s.join(" ")).collect();
        assert_eq!(starters, vec!["Bob saw", "Alice. Alice", "Alice saw"]);
    }

    #[test]
    fn separate_feeds_do_not_join() {
        let mut cb = Chain::builder(1).unwrap();
        cb.feed_str("One two");
        cb.feed_str("three four");
        let chain = cb.build();
        assert!(chain.continuations("two").is_none());
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn building_twice_gives_the_same_chain() {
        let a = Chain::from_corpus(FORTUNE, 2).unwrap();
        let b = Chain::from_corpus(FORTUNE, 2).unwrap();
        assert_eq!(a, b);
        assert!(a.keys().eq(b.keys()));
    }

    #[test]
    fn start_tokens_and_next_token() {
        let chain = Chain::from_corpus(FORTUNE, 2).unwrap();
        let mut picker = ScriptedPicker::first();
        let start = chain.start_tokens(&mut picker).unwrap();
        assert_eq!(start, ["Coach:", "How's"]);
        assert_eq!(
            chain.generate_next_token(&mut picker, "Coach: How's").unwrap(),
            "it"
        );
        assert!(chain
            .generate_next_token(&mut picker, "Nobody here")
            .is_none());
    }

    #[test]
    fn no_start_tokens_without_capitals() {
        let chain = Chain::from_corpus("a b c b a", 1).unwrap();
        assert!(chain.start_tokens(&mut ScriptedPicker::first()).is_none());
    }

    #[test]
    #[should_panic]
    fn wrong_key_width_panics() {
        let mut cb = Chain::builder(2).unwrap();
        cb.add_occurrence(&["only"], "one");
    }
}
