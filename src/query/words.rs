//! Word frequencies in free-text columns

use std::collections::{HashMap, HashSet};

use super::CategoryCount;
use crate::data::DerivedTable;
use crate::error::Result;

/// Split text into lowercase word tokens
///
/// Tokens are maximal runs of word characters (letters, digits, underscore).
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
}

/// Count tokens, most frequent first; ties keep first-seen order
fn stable_counts<I>(tokens: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for token in tokens {
        match index.get(&token) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push(CategoryCount {
                    label: token,
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `n` most frequent title tokens, excluding stop words
///
/// Stop words match case-insensitively, like the tokens themselves.
pub fn word_frequency(
    table: &DerivedTable,
    column: &str,
    stop_words: &[String],
    n: usize,
) -> Result<Vec<CategoryCount>> {
    profiling::scope!("word_frequency");

    let stop_words: HashSet<String> = stop_words.iter().map(|w| w.to_lowercase()).collect();
    let titles = table.text_values(column)?;
    let tokens = titles
        .iter()
        .flatten()
        .flat_map(|title| tokenize(title))
        .filter(|token| !stop_words.contains(token));

    let mut counts = stable_counts(tokens);
    counts.truncate(n);
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::derive::derive_frame;
    use polars::prelude::*;

    fn titles_table(titles: &[Option<&str>]) -> DerivedTable {
        let dates = vec!["2023-01-15"; titles.len()];
        let df = df!(
            "job_title" => titles,
            "job_posted_date" => dates
        )
        .unwrap();
        derive_frame(&df).unwrap()
    }

    #[test]
    fn test_tokenize() {
        let tokens: Vec<String> = tokenize("Sr. ML/AI Engineer - Computer_Vision (Remote)").collect();
        assert_eq!(
            tokens,
            vec!["sr", "ml", "ai", "engineer", "computer_vision", "remote"]
        );
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" -- ").count(), 0);
    }

    #[test]
    fn test_word_frequency_is_case_insensitive() {
        let stop_words = DashboardConfig::default().stop_words;
        let upper = titles_table(&[Some("ML Engineer")]);
        let lower = titles_table(&[Some("ml engineer")]);

        let a = word_frequency(&upper, "job_title", &stop_words, 20).unwrap();
        let b = word_frequency(&lower, "job_title", &stop_words, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_word_frequency_drops_stop_words() {
        let stop_words = DashboardConfig::default().stop_words;
        let table = titles_table(&[
            Some("Head of Machine Learning and AI"),
            Some("Engineer for the Machine Learning Team"),
            None,
            Some(""),
        ]);

        let words = word_frequency(&table, "job_title", &stop_words, 20).unwrap();
        assert!(words.iter().all(|w| !stop_words.contains(&w.label)));

        let top: Vec<(&str, u64)> = words
            .iter()
            .take(2)
            .map(|w| (w.label.as_str(), w.count))
            .collect();
        assert_eq!(top, vec![("machine", 2), ("learning", 2)]);
        assert_eq!(words.iter().map(|w| w.count).sum::<u64>(), 8);
    }

    #[test]
    fn test_stop_words_match_any_case() {
        let table = titles_table(&[Some("Research and Development"), Some("Sales AND Marketing")]);
        let stop_words = vec!["And".to_string()];

        let words = word_frequency(&table, "job_title", &stop_words, 20).unwrap();
        assert!(words.iter().all(|w| w.label != "and"));
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let counts = stable_counts(["x", "y", "z", "y", "x", "w"].iter().map(|s| s.to_string()));
        let pairs: Vec<(&str, u64)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("x", 2), ("y", 2), ("z", 1), ("w", 1)]);
    }

    #[test]
    fn test_word_frequency_truncates() {
        let table = titles_table(&[Some("alpha beta gamma delta")]);
        let words = word_frequency(&table, "job_title", &[], 2).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].label, "alpha");
    }
}
