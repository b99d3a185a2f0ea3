//! TF-IDF vectorizer over word n-grams
//!
//! [`TfidfVectorizer::fit`] freezes a vocabulary and IDF weights into a
//! [`TfidfModel`], which is then used unchanged for every transform.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::sparse::SparseVector;
use super::tokenizer::{ngrams, tokenize};
use crate::config::VectorizerConfig;
use crate::error::{Result, SpamError};

/// Unfitted vectorizer holding the hyperparameters
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
}

/// Fitted vectorizer: frozen vocabulary and IDF weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfModel {
    config: VectorizerConfig,
    /// Term to feature index
    vocabulary: BTreeMap<String, usize>,
    /// IDF weight per feature index
    idf: Vec<f64>,
    document_count: usize,
}

/// Corpus statistics for a single candidate term
#[derive(Debug, Default, Clone, Copy)]
struct TermStats {
    document_frequency: usize,
    total_frequency: usize,
}

impl TfidfVectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Learn vocabulary and IDF weights from `texts`
    pub fn fit<S: AsRef<str>>(&self, texts: &[S]) -> Result<TfidfModel> {
        self.config.validate()?;

        if texts.is_empty() {
            return Err(SpamError::Training(
                "Cannot fit vectorizer on an empty document set".to_string(),
            ));
        }

        let document_count = texts.len();
        let mut stats: HashMap<String, TermStats> = HashMap::new();

        for text in texts {
            for (term, count) in self.term_counts(text.as_ref()) {
                let entry = stats.entry(term).or_default();
                entry.document_frequency += 1;
                entry.total_frequency += count;
            }
        }

        let candidate_count = stats.len();
        let max_doc_count = self.config.max_df * document_count as f64;
        let mut kept: Vec<(String, TermStats)> = stats
            .into_iter()
            .filter(|(_, s)| {
                s.document_frequency >= self.config.min_df
                    && s.document_frequency as f64 <= max_doc_count
            })
            .collect();

        if kept.is_empty() {
            return Err(SpamError::Training(
                "After document-frequency pruning no terms remain".to_string(),
            ));
        }

        if kept.len() > self.config.max_features {
            // Highest corpus frequency first, ties by term
            kept.sort_by(|(a_term, a), (b_term, b)| {
                b.total_frequency
                    .cmp(&a.total_frequency)
                    .then_with(|| a_term.cmp(b_term))
            });
            kept.truncate(self.config.max_features);
        }

        kept.sort_by(|(a, _), (b, _)| a.cmp(b));

        let n = document_count as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(kept.len());
        for (index, (term, s)) in kept.into_iter().enumerate() {
            let df = s.document_frequency as f64;
            idf.push(if self.config.smooth_idf {
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            } else {
                (n / df).ln()
            });
            vocabulary.insert(term, index);
        }

        debug!(
            "Fitted TF-IDF vocabulary: {} of {} candidate terms over {} documents",
            vocabulary.len(),
            candidate_count,
            document_count
        );

        Ok(TfidfModel {
            config: self.config.clone(),
            vocabulary,
            idf,
            document_count,
        })
    }

    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        term_counts(&self.config, text)
    }
}

fn term_counts(config: &VectorizerConfig, text: &str) -> HashMap<String, usize> {
    let tokens = tokenize(text, config.lowercase);
    let mut counts = HashMap::new();
    for gram in ngrams(&tokens, config.ngram_min, config.ngram_max) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

impl TfidfModel {
    /// Feature space dimensionality
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Feature index of a term, if it survived fitting
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    /// L2-normalized TF-IDF vector for `text`. Terms outside the vocabulary
    /// contribute nothing.
    pub fn transform(&self, text: &str) -> SparseVector {
        let entries = term_counts(&self.config, text)
            .into_iter()
            .filter_map(|(term, count)| {
                self.vocabulary
                    .get(&term)
                    .map(|&index| (index, count as f64 * self.idf[index]))
            })
            .collect();

        let mut vector = SparseVector::new(self.vocabulary_size(), entries);
        vector.normalize();
        vector
    }

    pub fn transform_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SparseVector> {
        texts.iter().map(|t| self.transform(t.as_ref())).collect()
    }
}
