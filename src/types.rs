use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. A token is a non-empty run of the
/// lowercase letters `a` through `z`.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a text document.
pub type TokenFrequency = usize;

/// Represents a map of tokens to their frequency counts within a text document.
/// The key is the `Token`, and the value is the `TokenFrequency`.
///
/// Iteration order of this map is unspecified and must never be relied upon.
pub type TokenFrequencyMap = HashMap<Token, TokenFrequency>;

/// A single `(Token, TokenFrequency)` pair, as emitted by the ranker.
pub type RankedEntry = (Token, TokenFrequency);
