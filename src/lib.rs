#![forbid(unsafe_code)]
pub mod count;
pub mod error;
pub mod select;
pub mod text;

use std::fmt;

use fnv::FnvHashMap;

/// Word occurrence tally that remembers the order in which words were first
/// inserted. Iteration always follows that first-seen order, which is the
/// tie-break rule for the most-frequent selection.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    counts: FnvHashMap<String, u64>,
    order: Vec<String>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps `word` by one, registering it on first sight.
    pub fn increment(&mut self, word: String) {
        if let Some(n) = self.counts.get_mut(&word) {
            *n += 1;
        } else {
            self.order.push(word.clone());
            self.counts.insert(word, 1);
        }
    }

    /// Records the total for a word tallied elsewhere. The first insert
    /// claims the word's slot in the iteration order; a later insert for the
    /// same word only overwrites its count.
    pub fn insert(&mut self, word: String, count: u64) {
        if !self.counts.contains_key(&word) {
            self.order.push(word.clone());
        }
        self.counts.insert(word, count);
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of every tally, i.e. the number of tokens that were counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order.iter().map(|w| (w.as_str(), self.counts[w]))
    }
}

/// Content equality only; two tallies built in different orders still
/// compare equal when their word counts agree.
impl PartialEq for WordCounts {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for WordCounts {}

impl fmt::Display for WordCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (word, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {}", word, count)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, u64)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (word, count) in iter {
            counts.insert(word, count);
        }
        counts
    }
}
