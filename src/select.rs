use crate::WordCounts;

/// Finds the word with the highest tally in a single scan over the entries
/// in first-seen order. A later entry takes over only on a strictly greater
/// count, so the earliest-seen word wins ties. An empty tally yields
/// `(None, 0)`.
pub fn most_frequent(counts: &WordCounts) -> (Option<&str>, u64) {
    let mut best = (None, 0);
    for (word, count) in counts.iter() {
        if count > best.1 {
            best = (Some(word), count);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_yields_none() {
        assert_eq!(most_frequent(&WordCounts::new()), (None, 0));
    }

    #[test]
    fn picks_the_highest_count() {
        let counts: WordCounts = [
            ("a".to_owned(), 3),
            ("b".to_owned(), 5),
            ("c".to_owned(), 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(most_frequent(&counts), (Some("b"), 5));
    }

    #[test]
    fn tie_keeps_the_first_seen_word() {
        let counts: WordCounts = [
            ("second".to_owned(), 4),
            ("first".to_owned(), 4),
            ("third".to_owned(), 4),
        ]
        .into_iter()
        .collect();
        // "second" was inserted first, so it wins the three-way tie.
        assert_eq!(most_frequent(&counts), (Some("second"), 4));
    }

    #[test]
    fn single_entry_wins() {
        let counts: WordCounts = [("only".to_owned(), 1)].into_iter().collect();
        assert_eq!(most_frequent(&counts), (Some("only"), 1));
    }
}
