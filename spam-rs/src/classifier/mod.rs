//! Probabilistic binary classifiers
//!
//! Two base learners (logistic regression and multinomial naive Bayes) and a
//! soft-voting ensemble combining them.

pub mod ensemble;
pub mod logistic;
pub mod naive_bayes;

pub use ensemble::SoftVotingEnsemble;
pub use logistic::{LogisticParams, LogisticRegression};
pub use naive_bayes::MultinomialNb;

use crate::corpus::Label;
use crate::error::{Result, SpamError};
use crate::features::SparseVector;

/// A fitted classifier producing class probabilities
pub trait ProbabilisticClassifier {
    /// Short learner name used in logs
    fn name(&self) -> &'static str;

    /// Class probabilities indexed by [`Label::index`], summing to 1
    fn predict_proba(&self, x: &SparseVector) -> [f64; 2];

    /// Most probable class; ties go to the lower class index
    fn predict(&self, x: &SparseVector) -> Label {
        argmax(&self.predict_proba(x))
    }
}

/// Index of the largest probability, preferring the lowest index on ties
pub(crate) fn argmax(probabilities: &[f64; 2]) -> Label {
    if probabilities[Label::Spam.index()] > probabilities[Label::Normal.index()] {
        Label::Spam
    } else {
        Label::Normal
    }
}

/// Check a training set and return its feature dimensionality
pub(crate) fn check_training_set(features: &[SparseVector], labels: &[Label]) -> Result<usize> {
    if features.len() != labels.len() {
        return Err(SpamError::Training(format!(
            "Got {} feature vectors but {} labels",
            features.len(),
            labels.len()
        )));
    }

    let mut counts = [0usize; 2];
    for label in labels {
        counts[label.index()] += 1;
    }
    if counts.iter().any(|&c| c == 0) {
        return Err(SpamError::Training(format!(
            "Training requires both classes, got {} NORMAL and {} SPAM samples",
            counts[Label::Normal.index()],
            counts[Label::Spam.index()]
        )));
    }

    let dim = features[0].dim();
    if features.iter().any(|x| x.dim() != dim) {
        return Err(SpamError::Training(
            "Feature vectors have inconsistent dimensionality".to_string(),
        ));
    }

    Ok(dim)
}

#[cfg(test)]
pub(crate) mod testutils {
    use super::*;

    /// Tiny linearly separable set over 4 features: 0-1 spammy, 2-3 normal
    pub fn toy_set() -> (Vec<SparseVector>, Vec<Label>) {
        let rows = vec![
            (vec![(0, 0.8), (1, 0.6)], Label::Spam),
            (vec![(0, 1.0)], Label::Spam),
            (vec![(1, 1.0)], Label::Spam),
            (vec![(2, 0.6), (3, 0.8)], Label::Normal),
            (vec![(2, 1.0)], Label::Normal),
            (vec![(3, 1.0)], Label::Normal),
        ];
        let labels = rows.iter().map(|(_, l)| *l).collect();
        let features = rows
            .into_iter()
            .map(|(entries, _)| SparseVector::new(4, entries))
            .collect();
        (features, labels)
    }
}
