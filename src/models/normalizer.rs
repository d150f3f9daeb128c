use crate::constants::STOP_WORDS;
use crate::types::{Token, TokenRef};
use std::char::ToLowercase;
use std::iter::FusedIterator;
use std::str::Chars;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Normalizer {
    pub filter_stop_words: bool,
    pub min_token_length: usize,
}

impl Normalizer {
    /// Configuration for plain word counting: every run of `a`-`z` is a token.
    pub const fn word_count_parser() -> Self {
        Self {
            filter_stop_words: false,
            min_token_length: 1,
        }
    }

    /// Configuration which skips stop words and single letters.
    pub const fn content_word_parser() -> Self {
        Self {
            filter_stop_words: true,
            min_token_length: 2,
        }
    }

    /// Lazily splits `text` into lowercase tokens.
    ///
    /// Each character is case-folded first. Anything which does not fold to
    /// one of the letters `a`-`z` is a separator, so digits, punctuation, and
    /// non-ASCII letters all break words apart. Runs of separators never
    /// produce empty tokens.
    ///
    /// ```
    /// use wordrank::Normalizer;
    ///
    /// let tokens: Vec<_> = Normalizer::word_count_parser()
    ///     .tokens("It's 9AM, Mr. O'Brien!")
    ///     .collect();
    /// assert_eq!(tokens, vec!["it", "s", "am", "mr", "o", "brien"]);
    /// ```
    pub fn tokens<'a>(&self, text: &'a str) -> Tokens<'a> {
        Tokens {
            normalizer: *self,
            chars: text.chars(),
            folded: None,
        }
    }

    /// Eager variant of [`Normalizer::tokens`].
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokens(text).collect()
    }

    fn accepts(&self, token: &TokenRef) -> bool {
        // Tokens are ASCII, so byte length equals letter count
        if token.len() < self.min_token_length {
            return false;
        }

        !self.filter_stop_words || STOP_WORDS.binary_search(&token).is_err()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::word_count_parser()
    }
}

/// Iterator returned by [`Normalizer::tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    normalizer: Normalizer,
    chars: Chars<'a>,
    folded: Option<ToLowercase>,
}

impl Tokens<'_> {
    /// Some characters lowercase to more than one character, so folded
    /// output is drained before pulling the next source character.
    fn next_folded_char(&mut self) -> Option<char> {
        loop {
            if let Some(folded) = self.folded.as_mut() {
                if let Some(c) = folded.next() {
                    return Some(c);
                }
                self.folded = None;
            }

            let c = self.chars.next()?;
            self.folded = Some(c.to_lowercase());
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let mut token = Token::new();

            while let Some(c) = self.next_folded_char() {
                if c.is_ascii_lowercase() {
                    token.push(c);
                } else if !token.is_empty() {
                    break;
                }
            }

            // Source exhausted
            if token.is_empty() {
                return None;
            }

            if self.normalizer.accepts(&token) {
                return Some(token);
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}
