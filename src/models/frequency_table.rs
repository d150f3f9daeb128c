use crate::types::{Token, TokenFrequency, TokenFrequencyMap, TokenRef};
use log::debug;
use std::collections::hash_map;

/// Occurrence counts for every distinct token observed in a document.
///
/// Tokens which were never observed are absent; there are no explicit zero
/// entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    frequencies: TokenFrequencyMap,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a sequence of tokens. The result does not depend
    /// on the order in which tokens are supplied.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        let mut table = Self::new();

        for token in tokens {
            table.observe(token);
        }

        debug!(
            "Counted {} distinct tokens ({} total)",
            table.len(),
            table.total()
        );

        table
    }

    /// Increments the count for `token` by one.
    pub fn observe<T: Into<Token>>(&mut self, token: T) {
        *self.frequencies.entry(token.into()).or_insert(0) += 1;
    }

    /// Adds every count from `other` into this table.
    ///
    /// Merging is commutative, so per-shard tables can be combined in any
    /// order.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (token, frequency) in other.frequencies {
            *self.frequencies.entry(token).or_insert(0) += frequency;
        }
    }

    /// Returns the count for `token`, or `None` if it was never observed.
    pub fn get(&self, token: &TokenRef) -> Option<TokenFrequency> {
        self.frequencies.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens observed.
    pub fn total(&self) -> usize {
        self.frequencies.values().sum()
    }

    /// Iterates the entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, Token, TokenFrequency> {
        self.frequencies.iter()
    }

    pub fn into_inner(self) -> TokenFrequencyMap {
        self.frequencies
    }
}

impl From<TokenFrequencyMap> for FrequencyTable {
    /// Zero counts are dropped so the table never materializes them.
    fn from(mut frequencies: TokenFrequencyMap) -> Self {
        frequencies.retain(|_, frequency| *frequency > 0);

        Self { frequencies }
    }
}

impl<T: Into<Token>> FromIterator<T> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = T>>(tokens: I) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<T: Into<Token>> Extend<T> for FrequencyTable {
    fn extend<I: IntoIterator<Item = T>>(&mut self, tokens: I) {
        for token in tokens {
            self.observe(token);
        }
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (Token, TokenFrequency);
    type IntoIter = hash_map::IntoIter<Token, TokenFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.frequencies.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a Token, &'a TokenFrequency);
    type IntoIter = hash_map::Iter<'a, Token, TokenFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.frequencies.iter()
    }
}
