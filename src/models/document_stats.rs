use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Line, word, and character totals for a document, in the manner of `wc`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of `'\n'` characters.
    pub lines: usize,
    /// Number of whitespace-separated pieces.
    pub words: usize,
    /// Number of Unicode scalar values.
    pub chars: usize,
}

impl DocumentStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.matches('\n').count(),
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
        }
    }
}

impl Add for DocumentStats {
    type Output = DocumentStats;

    fn add(self, other: DocumentStats) -> DocumentStats {
        DocumentStats {
            lines: self.lines + other.lines,
            words: self.words + other.words,
            chars: self.chars + other.chars,
        }
    }
}

impl Sum for DocumentStats {
    fn sum<I: Iterator<Item = DocumentStats>>(iter: I) -> Self {
        iter.fold(DocumentStats::default(), Add::add)
    }
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lines, self.words, self.chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_lines_words_chars() {
        let stats = DocumentStats::from_text("one two\nthree\n");

        assert_eq!(
            stats,
            DocumentStats {
                lines: 2,
                words: 3,
                chars: 14
            }
        );
        assert_eq!(stats.to_string(), "2 3 14");
    }

    #[test]
    fn test_chars_are_not_bytes() {
        assert_eq!(DocumentStats::from_text("na\u{ef}ve").chars, 5);
    }

    #[test]
    fn test_sum_of_documents() {
        let total: DocumentStats = ["a b\n", "c\n", ""]
            .into_iter()
            .map(DocumentStats::from_text)
            .sum();

        assert_eq!(
            total,
            DocumentStats {
                lines: 2,
                words: 3,
                chars: 6
            }
        );
    }
}
