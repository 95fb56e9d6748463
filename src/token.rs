//! At the heart of a [`Chain`](crate::Chain) is a [`Token`]. In fact, this is just a String. But
//! we make a distinction here: A Token is a whitespace-delimited word, punctuation and all. `"word."`
//! and `"word"` are different tokens, and so are `"Word"` and `"word"`.
//!
//! A chain of order `n` is keyed by `n` consecutive tokens. The key is stored as the tokens joined
//! by a single space; since no token contains whitespace, that string identifies the window.

use itertools::Itertools;

/// Representation of a single word.
pub type Token = String;

/// A borrowed version of [`Token`]; if [`Token`] is [`String`], then [`TokenRef`] is `&str`.
pub type TokenRef<'a> = &'a str;

/// Splits `text` into tokens. Runs of whitespace collapse, and leading or trailing whitespace
/// never produces an empty token.
///
/// ```
/// # use markov_says::token::tokenize;
/// let tokens: Vec<_> = tokenize("  Hello\tworld.\n\nBye ").collect();
/// assert_eq!(tokens, vec!["Hello", "world.", "Bye"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = TokenRef<'_>> {
    text.split_whitespace()
}

/// Joins a window of tokens into the key used to look it up in a chain.
pub fn join_key<S: AsRef<str>>(words: &[S]) -> String {
    words.iter().map(AsRef::as_ref).join(" ")
}

/// Splits a key back into its owned tokens.
pub fn split_key(key: &str) -> Vec<Token> {
    key.split(' ').map(str::to_string).collect()
}

/// A key can start a sentence if its first character is uppercase.
pub fn is_starter(key: &str) -> bool {
    key.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_case_make_distinct_tokens() {
        let tokens: Vec<_> = tokenize("word word. Word").collect();
        assert_eq!(tokens, vec!["word", "word.", "Word"]);
    }

    #[test]
    fn blank_text_has_no_tokens() {
        assert_eq!(tokenize(" \n\t ").count(), 0);
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn keys_round_trip_through_join() {
        let key = join_key(&["Hello", "there."]);
        assert_eq!(key, "Hello there.");
        assert_eq!(split_key(&key), vec!["Hello", "there."]);
    }

    #[test]
    fn starters_need_an_uppercase_first_char() {
        assert!(is_starter("Hello world"));
        assert!(is_starter("Émile said"));
        assert!(!is_starter("hello World"));
        assert!(!is_starter("\"Quoted\" text"));
        assert!(!is_starter("42 Things"));
        assert!(!is_starter(""));
    }
}
