//! Word search over a [`GridIndex`].
//!
//! Distinct words are grouped by their first letter. For each group the
//! rows are walked top to bottom; rows without the key letter are skipped,
//! and each column holding the key letter is scheduled once per group, at
//! the first row where the letter shows up in it. A word's contribution
//! from a row is counted from the row's first key letter onward, and from a
//! scheduled column from the current row downward. One-letter words are
//! counted through the columns only, so every cell is seen exactly once.
//!
//! Ranking is by descending count; equal counts keep the order in which the
//! words first appeared in the input.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::count::count_chars;
use crate::grid::GridIndex;
use crate::stats::SearchStats;

/// A matched word and its total occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub word: String,
    pub count: usize,
}

/// A distinct query word. Its position in the query list is its ordinal.
struct Query {
    word: String,
    chars: Vec<char>,
}

/// Ordinals of the distinct words sharing a first letter.
struct WordGroup {
    key: char,
    members: Vec<usize>,
}

/// Per-search totals keyed by query ordinal.
#[derive(Default)]
struct OccurrenceTally {
    counts: HashMap<usize, usize>,
}

impl OccurrenceTally {
    fn add(&mut self, ordinal: usize, n: usize) {
        *self.counts.entry(ordinal).or_insert(0) += n;
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn into_ranked(self, queries: &[Query], limit: usize) -> Vec<ResultEntry> {
        let mut entries: Vec<(usize, usize)> =
            self.counts.into_iter().filter(|&(_, n)| n > 0).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
            .into_iter()
            .map(|(ordinal, count)| ResultEntry {
                word: queries[ordinal].word.clone(),
                count,
            })
            .collect()
    }
}

/// Deduplicate `words` and group them by first letter, both in first-seen
/// order. Empty words are dropped.
fn group_words<I, S>(words: I) -> (Vec<Query>, Vec<WordGroup>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut queries = Vec::new();
    let mut groups: Vec<WordGroup> = Vec::new();
    let mut group_of: HashMap<char, usize> = HashMap::new();

    for word in words {
        let word = word.as_ref();
        let Some(key) = word.chars().next() else {
            continue;
        };
        if !seen.insert(word.to_string()) {
            continue;
        }
        let ordinal = queries.len();
        queries.push(Query {
            word: word.to_string(),
            chars: word.chars().collect(),
        });
        let g = *group_of.entry(key).or_insert_with(|| {
            groups.push(WordGroup {
                key,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[g].members.push(ordinal);
    }
    (queries, groups)
}

impl GridIndex {
    /// Return up to `number_of_results` words, most frequent first.
    pub fn find<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.find_ranked(words)
            .into_iter()
            .map(|entry| entry.word)
            .collect()
    }

    /// Like [`GridIndex::find`], keeping the counts.
    pub fn find_ranked<I, S>(&self, words: I) -> Vec<ResultEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = SearchStats::new();
        self.find_with_stats(words, &mut stats, |_, _| {})
    }

    /// Ranked search that fills `stats` and calls `on_group(done, total)`
    /// after each first-letter group.
    pub fn find_with_stats<I, S, F>(
        &self,
        words: I,
        stats: &mut SearchStats,
        mut on_group: F,
    ) -> Vec<ResultEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(usize, usize),
    {
        let (queries, groups) = group_words(words);
        stats.distinct_words = queries.len();
        stats.groups = groups.len();

        let mut tally = OccurrenceTally::default();
        for (done, group) in groups.iter().enumerate() {
            self.scan_group(group, &queries, &mut tally, stats);
            on_group(done + 1, groups.len());
        }

        stats.matched_words = tally.len();
        tally.into_ranked(&queries, self.config.number_of_results)
    }

    fn scan_group(
        &self,
        group: &WordGroup,
        queries: &[Query],
        tally: &mut OccurrenceTally,
        stats: &mut SearchStats,
    ) {
        let mut searched = vec![false; self.columns.len()];
        let mut to_search = Vec::new();

        for (row_index, row) in self.rows.iter().enumerate() {
            let Some(first) = row.iter().position(|&c| c == group.key) else {
                stats.rows_skipped += 1;
                continue;
            };
            stats.rows_scanned += 1;

            to_search.clear();
            for (j, &c) in row.iter().enumerate().skip(first) {
                if c == group.key && !searched[j] {
                    searched[j] = true;
                    to_search.push(j);
                }
            }
            stats.column_scans += to_search.len();

            for &ordinal in &group.members {
                let word = &queries[ordinal].chars;
                // one-letter words are left to the column pass
                let mut total = if word.len() > 1 {
                    count_chars(word, &row[first..])
                } else {
                    0
                };
                for &j in &to_search {
                    total += count_chars(word, &self.columns[j][row_index..]);
                }
                if total > 0 {
                    tally.add(ordinal, total);
                }
            }
        }
    }
}
