//! Word selection for a quiz session

use rand::seq::SliceRandom;

use super::models::{QuizOrder, QuizSettings};
use crate::words::WordEntry;

/// Select the words to present for the given settings
///
/// Filters the word list to the closed interval
/// `range_start..=range_end`, orders it, and caps it at
/// `question_count`. An empty filtered range yields an empty selection;
/// the session runner treats that as an immediately complete session.
/// The source list is never mutated.
pub fn select(words: &[WordEntry], settings: &QuizSettings) -> Vec<WordEntry> {
    let mut filtered: Vec<WordEntry> = words
        .iter()
        .filter(|w| w.no >= settings.range_start && w.no <= settings.range_end)
        .cloned()
        .collect();

    match settings.order {
        QuizOrder::Random => filtered.shuffle(&mut rand::thread_rng()),
        QuizOrder::Sequential => filtered.sort_by_key(|w| w.no),
    }

    filtered.truncate(settings.question_count);
    filtered
}

/// Selection for a review-missed session
///
/// The input is the previous session's missed words, so no range filter
/// and no count cap apply; the order is always shuffled.
pub fn select_review(missed: &[WordEntry]) -> Vec<WordEntry> {
    let mut words = missed.to_vec();
    words.shuffle(&mut rand::thread_rng());
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(nos: &[u32]) -> Vec<WordEntry> {
        nos.iter()
            .map(|&no| WordEntry::new(no, format!("word{}", no), format!("meaning{}", no)))
            .collect()
    }

    fn settings(start: u32, end: u32, count: usize, order: QuizOrder) -> QuizSettings {
        QuizSettings {
            range_start: start,
            range_end: end,
            question_count: count,
            order,
        }
    }

    #[test]
    fn test_selection_stays_within_range() {
        let pool = words(&[1, 3, 5, 8, 13, 21, 34]);
        let selected = select(&pool, &settings(3, 13, 100, QuizOrder::Random));

        assert!(!selected.is_empty());
        assert!(selected.iter().all(|w| w.no >= 3 && w.no <= 13));
    }

    #[test]
    fn test_selection_size_is_min_of_count_and_supply() {
        let pool = words(&[1, 2, 3, 4, 5]);

        assert_eq!(select(&pool, &settings(1, 5, 3, QuizOrder::Random)).len(), 3);
        assert_eq!(select(&pool, &settings(1, 5, 10, QuizOrder::Random)).len(), 5);
        assert_eq!(select(&pool, &settings(2, 4, 10, QuizOrder::Sequential)).len(), 3);
    }

    #[test]
    fn test_sequential_takes_first_in_ascending_order() {
        let pool = words(&[5, 2, 4, 1, 3]);
        let selected = select(&pool, &settings(1, 5, 3, QuizOrder::Sequential));

        let nos: Vec<u32> = selected.iter().map(|w| w.no).collect();
        assert_eq!(nos, vec![1, 2, 3]);
    }

    #[test]
    fn test_random_output_is_subset_of_filtered() {
        let pool = words(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let selected = select(&pool, &settings(2, 7, 4, QuizOrder::Random));

        assert_eq!(selected.len(), 4);
        for w in &selected {
            assert!(pool.contains(w));
            assert!(w.no >= 2 && w.no <= 7);
        }
        // No duplicates
        let mut nos: Vec<u32> = selected.iter().map(|w| w.no).collect();
        nos.sort_unstable();
        nos.dedup();
        assert_eq!(nos.len(), 4);
    }

    #[test]
    fn test_empty_range_yields_empty_selection() {
        let pool = words(&[1, 2, 3]);
        assert!(select(&pool, &settings(10, 20, 5, QuizOrder::Random)).is_empty());
    }

    #[test]
    fn test_zero_count_yields_zero_questions() {
        let pool = words(&[1, 2, 3]);
        assert!(select(&pool, &settings(1, 3, 0, QuizOrder::Sequential)).is_empty());
    }

    #[test]
    fn test_source_list_is_not_mutated() {
        let pool = words(&[3, 1, 2]);
        let before = pool.clone();
        select(&pool, &settings(1, 3, 3, QuizOrder::Random));
        assert_eq!(pool, before);
    }

    #[test]
    fn test_review_selection_keeps_every_missed_word() {
        let missed = words(&[7, 42]);
        let review = select_review(&missed);

        assert_eq!(review.len(), 2);
        for w in &missed {
            assert!(review.contains(w));
        }
    }
}
