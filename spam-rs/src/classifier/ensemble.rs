//! Soft-voting ensemble of logistic regression and naive Bayes

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{check_training_set, LogisticParams, LogisticRegression, MultinomialNb, ProbabilisticClassifier};
use crate::config::TrainingConfig;
use crate::corpus::Label;
use crate::error::{Result, SpamError};
use crate::features::SparseVector;

/// Weighted average of the two base learners' class probabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftVotingEnsemble {
    logistic: LogisticRegression,
    naive_bayes: MultinomialNb,
    /// [logistic, naive bayes]
    weights: [f64; 2],
}

impl SoftVotingEnsemble {
    /// Fit both base learners independently on the same data
    pub fn fit(features: &[SparseVector], labels: &[Label], config: &TrainingConfig) -> Result<Self> {
        check_training_set(features, labels)?;
        if config.voting_weights.iter().any(|w| !(*w > 0.0)) {
            return Err(SpamError::Training(format!(
                "Voting weights must be positive, got {:?}",
                config.voting_weights
            )));
        }

        let logistic = LogisticRegression::fit(features, labels, &LogisticParams::from(config))?;
        let naive_bayes = MultinomialNb::fit(features, labels, config.nb_alpha)?;

        debug!(
            "Fitted {} + {} on {} samples ({} logistic iterations)",
            logistic.name(),
            naive_bayes.name(),
            features.len(),
            logistic.iterations()
        );

        Ok(Self {
            logistic,
            naive_bayes,
            weights: config.voting_weights,
        })
    }

    pub fn logistic(&self) -> &LogisticRegression {
        &self.logistic
    }

    pub fn naive_bayes(&self) -> &MultinomialNb {
        &self.naive_bayes
    }

    pub fn weights(&self) -> [f64; 2] {
        self.weights
    }

    /// Whether the iterative learner reached its tolerance
    pub fn converged(&self) -> bool {
        self.logistic.converged()
    }
}

impl ProbabilisticClassifier for SoftVotingEnsemble {
    fn name(&self) -> &'static str {
        "soft_voting"
    }

    fn predict_proba(&self, x: &SparseVector) -> [f64; 2] {
        let members: [&dyn ProbabilisticClassifier; 2] = [&self.logistic, &self.naive_bayes];
        let total: f64 = self.weights.iter().sum();

        let mut averaged = [0.0; 2];
        for (member, weight) in members.iter().zip(self.weights) {
            let p = member.predict_proba(x);
            averaged[0] += weight * p[0];
            averaged[1] += weight * p[1];
        }

        averaged.map(|p| p / total)
    }
}
