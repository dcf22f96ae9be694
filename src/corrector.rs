use rayon::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use log::{info, trace};

use crate::config::{DEFAULT_MAX_EDIT_DISTANCE, validate_max_edit_distance};
use crate::distance::distance_within;
use crate::error::ConfigError;
use crate::fold_case;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// "Did you mean" lookup over a vocabulary grouped by word length.
#[derive(Debug, Clone)]
pub struct Corrector {
    vocabulary: HashSet<String>,
    length_buckets: HashMap<usize, Vec<String>>, // char count -> words, insertion order
    max_edit_distance: usize,
}

impl Corrector {
    /// Builds the corrector from `vocabulary`, lowercased and deduplicated.
    /// Blank entries are skipped.
    pub fn new<I, S>(vocabulary: I, max_edit_distance: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_max_edit_distance(max_edit_distance)?;
        Ok(Self::build(vocabulary, max_edit_distance))
    }

    pub fn with_default_distance<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(vocabulary, DEFAULT_MAX_EDIT_DISTANCE)
    }

    fn build<I, S>(vocabulary: I, max_edit_distance: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corrector = Corrector {
            vocabulary: HashSet::new(),
            length_buckets: HashMap::new(),
            max_edit_distance,
        };
        for word in vocabulary {
            corrector.add_word(word.as_ref());
        }

        info!(
            "corrector built with {} words in {} length buckets (max distance {})",
            corrector.vocabulary.len(),
            corrector.length_buckets.len(),
            max_edit_distance
        );
        corrector
    }

    /// Adds a word to the vocabulary and to its length bucket. Blank and
    /// already known words are ignored.
    pub fn add_word(&mut self, word: &str) {
        if word.trim().is_empty() {
            return;
        }
        let word = fold_case(word);
        if self.vocabulary.contains(&word) {
            return;
        }
        self.length_buckets
            .entry(word.chars().count())
            .or_default()
            .push(word.clone());
        self.vocabulary.insert(word);
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.vocabulary.contains(&fold_case(word.trim()))
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Up to `top_k` vocabulary words near `word`, closest first.
    pub fn suggest(&self, word: &str, top_k: usize) -> Vec<String> {
        self.suggest_with_distance(word, top_k)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Like [`suggest`](Self::suggest) but keeps each candidate's distance.
    ///
    /// Empty when the query is blank or already a vocabulary word. Only
    /// words within one character of the query's length and sharing its
    /// first character are considered, so some two-edit corrections are
    /// never offered. Ties on distance are broken alphabetically.
    pub fn suggest_with_distance(&self, word: &str, top_k: usize) -> Vec<Suggestion> {
        let word = fold_case(word.trim());
        let Some(first) = word.chars().next() else {
            return Vec::new();
        };
        if top_k == 0 || self.vocabulary.contains(&word) {
            return Vec::new();
        }

        let word_len = word.chars().count();
        let lengths = word_len.saturating_sub(1).max(1)..=word_len + 1;

        let mut scanned = 0;
        let mut suggestions: Vec<Suggestion> = lengths
            .filter_map(|len| self.length_buckets.get(&len))
            .flatten()
            .filter(|term| term.starts_with(first))
            .inspect(|_| scanned += 1)
            .filter_map(|term| {
                distance_within(&word, term, self.max_edit_distance).map(|distance| Suggestion {
                    word: term.clone(),
                    distance,
                })
            })
            .collect();
        trace!(
            "'{}': {} candidates scanned, {} within distance {}",
            word,
            scanned,
            suggestions.len(),
            self.max_edit_distance
        );

        suggestions.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));
        suggestions.truncate(top_k);
        suggestions
    }

    /// [`suggest`](Self::suggest) for many words in parallel, results in
    /// input order.
    pub fn suggest_many<S>(&self, words: &[S], top_k: usize) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.suggest(word.as_ref(), top_k))
            .collect()
    }
}
