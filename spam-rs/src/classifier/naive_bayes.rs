//! Multinomial naive Bayes with additive smoothing

use serde::{Deserialize, Serialize};

use super::{check_training_set, ProbabilisticClassifier};
use crate::corpus::Label;
use crate::error::{Result, SpamError};
use crate::features::SparseVector;

/// Fitted multinomial naive Bayes model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha: f64,
    /// ln P(class)
    class_log_prior: [f64; 2],
    /// ln P(feature | class), one row per class
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNb {
    /// Estimate priors and smoothed per-class feature likelihoods. Features
    /// must be non-negative.
    pub fn fit(features: &[SparseVector], labels: &[Label], alpha: f64) -> Result<Self> {
        let dim = check_training_set(features, labels)?;
        if alpha <= 0.0 {
            return Err(SpamError::Training(format!(
                "Smoothing alpha must be positive, got {}",
                alpha
            )));
        }

        let mut class_counts = [0usize; 2];
        let mut feature_counts = [vec![0.0; dim], vec![0.0; dim]];

        for (x, label) in features.iter().zip(labels) {
            let class = label.index();
            class_counts[class] += 1;
            for (i, v) in x.iter() {
                if v < 0.0 {
                    return Err(SpamError::Training(
                        "Naive Bayes requires non-negative features".to_string(),
                    ));
                }
                feature_counts[class][i] += v;
            }
        }

        let total = features.len() as f64;
        let class_log_prior = [
            (class_counts[0] as f64 / total).ln(),
            (class_counts[1] as f64 / total).ln(),
        ];

        let feature_log_prob: [Vec<f64>; 2] = feature_counts.map(|counts| {
            let denominator = (counts.iter().sum::<f64>() + alpha * dim as f64).ln();
            counts
                .into_iter()
                .map(|c| (c + alpha).ln() - denominator)
                .collect::<Vec<f64>>()
        });

        Ok(Self {
            alpha,
            class_log_prior,
            feature_log_prob,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn class_log_prior(&self) -> [f64; 2] {
        self.class_log_prior
    }

    /// Unnormalized ln P(class) + sum x_i ln P(i | class)
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> [f64; 2] {
        let mut jll = self.class_log_prior;
        for (class, log_probs) in self.feature_log_prob.iter().enumerate() {
            jll[class] += x.dot(log_probs);
        }
        jll
    }
}

impl ProbabilisticClassifier for MultinomialNb {
    fn name(&self) -> &'static str {
        "multinomial_nb"
    }

    fn predict_proba(&self, x: &SparseVector) -> [f64; 2] {
        softmax(self.joint_log_likelihood(x))
    }
}

fn softmax(log_probs: [f64; 2]) -> [f64; 2] {
    let max = log_probs[0].max(log_probs[1]);
    let exp = log_probs.map(|l| (l - max).exp());
    let sum = exp[0] + exp[1];
    exp.map(|e| e / sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutils::toy_set;

    #[test]
    fn test_fit_separates_toy_set() {
        let (features, labels) = toy_set();
        let model = MultinomialNb::fit(&features, &labels, 1.0).unwrap();

        for (x, label) in features.iter().zip(&labels) {
            assert_eq!(model.predict(x), *label);
        }
    }

    #[test]
    fn test_zero_vector_falls_back_to_priors() {
        let features = vec![
            SparseVector::new(2, vec![(0, 1.0)]),
            SparseVector::new(2, vec![(0, 1.0)]),
            SparseVector::new(2, vec![(0, 1.0)]),
            SparseVector::new(2, vec![(1, 1.0)]),
        ];
        let labels = vec![Label::Spam, Label::Spam, Label::Spam, Label::Normal];
        let model = MultinomialNb::fit(&features, &labels, 1.0).unwrap();

        let p = model.predict_proba(&SparseVector::zeros(2));
        assert!((p[Label::Normal.index()] - 0.25).abs() < 1e-12);
        assert!((p[Label::Spam.index()] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_smoothing_keeps_unseen_features_finite() {
        let (features, labels) = toy_set();
        let model = MultinomialNb::fit(&features, &labels, 1.0).unwrap();

        let jll = model.joint_log_likelihood(&SparseVector::new(4, vec![(3, 1.0)]));
        assert!(jll.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_rejects_negative_features() {
        let features = vec![
            SparseVector::new(2, vec![(0, -1.0)]),
            SparseVector::new(2, vec![(1, 1.0)]),
        ];
        let labels = vec![Label::Spam, Label::Normal];
        assert!(MultinomialNb::fit(&features, &labels, 1.0).is_err());
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let p = softmax([-1000.0, -1001.0]);
        assert!((p[0] + p[1] - 1.0).abs() < 1e-12);
        assert!(p[0] > p[1]);
    }
}
