pub mod constants;

use constants::DEFAULT_FIXTURE_TOP_N;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// A text fixture with its expected ranking.
///
/// Fixture files are plain text. Lines starting with `EXPECTED:` hold one
/// `word count` pair each, in ranked order. An optional `TOP:` line sets how
/// many entries to request. `COMMENT:` lines are ignored. Every other line is
/// the input text.
#[derive(Debug)]
pub struct Fixture {
    pub text: String,
    pub top_n: i64,
    pub expected: Vec<(String, usize)>,
}

pub fn load_fixture(file_path: &Path) -> Fixture {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let mut text_lines = Vec::new();
    let mut top_n = DEFAULT_FIXTURE_TOP_N;
    let mut expected = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();

        if let Some(entry) = trimmed.strip_prefix("EXPECTED:") {
            let mut parts = entry.split_whitespace();
            let word = parts.next().expect("EXPECTED line is missing a word");
            let count = parts
                .next()
                .and_then(|count| count.parse::<usize>().ok())
                .expect("EXPECTED line is missing a numeric count");
            expected.push((word.to_string(), count));
        } else if let Some(value) = trimmed.strip_prefix("TOP:") {
            top_n = value.trim().parse().expect("TOP line is not an integer");
        } else if !trimmed.starts_with("COMMENT:") {
            text_lines.push(line);
        }
    }

    Fixture {
        text: text_lines.join("\n"),
        top_n,
        expected,
    }
}

/// Runs `rank` against the fixture at `test_file_path` and asserts that the
/// ranking matches its `EXPECTED:` lines exactly.
pub fn run_test_for_file<F>(test_file_path: &Path, rank: F)
where
    F: Fn(&str, i64) -> Vec<(String, usize)>,
{
    let fixture = load_fixture(test_file_path);

    eprintln!("Testing file: {}", test_file_path.display());

    let results = rank(&fixture.text, fixture.top_n);

    assert_eq!(
        results,
        fixture.expected,
        "{} - ranking mismatch",
        test_file_path.display()
    );
}

/// Returns every permutation of `items` (Heap's algorithm).
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut current = items.to_vec();
    let mut results = vec![current.clone()];
    let mut counters = vec![0; current.len()];

    let mut i = 1;
    while i < current.len() {
        if counters[i] < i {
            if i % 2 == 0 {
                current.swap(0, i);
            } else {
                current.swap(counters[i], i);
            }
            results.push(current.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    results
}

/// Generates `count` lowercase words drawn from a vocabulary of
/// `vocabulary_size` short words, with plenty of repeats so frequency ties
/// are common. The same `seed` always yields the same words.
pub fn generate_words(seed: u64, count: usize, vocabulary_size: u32) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let mut index = rng.random_range(0..vocabulary_size.max(1));
            let mut word = String::new();
            loop {
                word.push((b'a' + (index % 26) as u8) as char);
                index /= 26;
                if index == 0 {
                    break;
                }
            }
            word
        })
        .collect()
}
