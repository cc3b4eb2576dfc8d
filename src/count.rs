use std::path::Path;

use fnv::FnvHashSet;
use log::debug;

use crate::error::CountError;
use crate::text;
use crate::WordCounts;

/// Quadratic baseline: collects the distinct words, then rescans the whole
/// token sequence once per distinct word. O(n·m) comparisons for n tokens
/// and m distinct words.
pub fn count_words_brute_force(path: Option<&Path>) -> Result<WordCounts, CountError> {
    let tokens = text::read_tokens(path)?;

    // Dedup in first-appearance order so both counters agree on the
    // iteration order the tie-break rule depends on.
    let mut seen = FnvHashSet::default();
    let distinct: Vec<&String> = tokens.iter().filter(|w| seen.insert(w.as_str())).collect();
    debug!("{} distinct word(s) among {} token(s)", distinct.len(), tokens.len());

    let mut counts = WordCounts::new();
    for word in distinct {
        let occurrences = tokens.iter().filter(|t| *t == word).count() as u64;
        counts.insert(word.clone(), occurrences);
    }
    Ok(counts)
}

/// Single-pass tally. O(n) time, O(m) auxiliary space. Content-equal to
/// the brute-force counter for the same input.
pub fn count_words_optimized(path: Option<&Path>) -> Result<WordCounts, CountError> {
    let tokens = text::read_tokens(path)?;
    let mut counts = WordCounts::new();
    for word in tokens {
        counts.increment(word);
    }
    Ok(counts)
}
