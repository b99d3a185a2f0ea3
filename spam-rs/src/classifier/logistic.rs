//! Binary logistic regression
//!
//! Minimizes the mean log-loss plus an L2 penalty of `1 / (2 C n) * ||w||^2`
//! (the intercept is not penalized) with Nesterov-accelerated gradient
//! descent. The step size is the inverse of the gradient's Lipschitz bound,
//! so no learning rate needs tuning.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{check_training_set, ProbabilisticClassifier};
use crate::config::TrainingConfig;
use crate::corpus::Label;
use crate::error::Result;
use crate::features::SparseVector;

/// Optimization settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticParams {
    pub max_iter: usize,
    pub tolerance: f64,
    pub c: f64,
}

impl From<&TrainingConfig> for LogisticParams {
    fn from(config: &TrainingConfig) -> Self {
        Self {
            max_iter: config.max_iter,
            tolerance: config.tolerance,
            c: config.c,
        }
    }
}

/// Fitted logistic regression model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    intercept: f64,
    iterations: usize,
    converged: bool,
}

impl LogisticRegression {
    /// Fit on `features` / `labels`. Running out of iterations is not an
    /// error: the current parameters are kept and `converged()` is false.
    pub fn fit(features: &[SparseVector], labels: &[Label], params: &LogisticParams) -> Result<Self> {
        let dim = check_training_set(features, labels)?;
        let n = features.len() as f64;
        let targets: Vec<f64> = labels.iter().map(|&l| if l == Label::Spam { 1.0 } else { 0.0 }).collect();

        let l2 = 1.0 / (params.c * n);
        let max_sq_norm = features
            .iter()
            .map(|x| x.l2_norm().powi(2))
            .fold(0.0, f64::max);
        let lipschitz = 0.25 * (max_sq_norm + 1.0) + l2;
        let step = 1.0 / lipschitz;

        // Momentum for an l2-strongly convex objective
        let kappa = lipschitz / l2;
        let momentum = (kappa.sqrt() - 1.0) / (kappa.sqrt() + 1.0);

        // Last slot holds the intercept
        let mut theta = vec![0.0; dim + 1];
        let mut lookahead = theta.clone();
        let mut iterations = 0;
        let mut converged = false;

        while iterations < params.max_iter {
            let grad = gradient(features, &targets, &lookahead, l2);
            let grad_max = grad.iter().fold(0.0f64, |m, g| m.max(g.abs()));
            if grad_max < params.tolerance {
                theta = lookahead;
                converged = true;
                break;
            }

            iterations += 1;
            let next: Vec<f64> = lookahead
                .iter()
                .zip(&grad)
                .map(|(p, g)| p - step * g)
                .collect();
            lookahead = next
                .iter()
                .zip(&theta)
                .map(|(new, old)| new + momentum * (new - old))
                .collect();
            theta = next;
        }

        if converged {
            debug!("Logistic regression converged after {} iterations", iterations);
        } else {
            warn!(
                "Logistic regression did not converge within {} iterations, keeping current parameters",
                params.max_iter
            );
        }

        let intercept = theta.pop().unwrap_or(0.0);
        Ok(Self {
            weights: theta,
            intercept,
            iterations,
            converged,
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Log-odds of SPAM
    pub fn decision_function(&self, x: &SparseVector) -> f64 {
        x.dot(&self.weights) + self.intercept
    }
}

impl ProbabilisticClassifier for LogisticRegression {
    fn name(&self) -> &'static str {
        "logistic_regression"
    }

    fn predict_proba(&self, x: &SparseVector) -> [f64; 2] {
        let p_spam = sigmoid(self.decision_function(x));
        [1.0 - p_spam, p_spam]
    }
}

/// Gradient of the regularized mean log-loss at `theta`
fn gradient(features: &[SparseVector], targets: &[f64], theta: &[f64], l2: f64) -> Vec<f64> {
    let dim = theta.len() - 1;
    let n = features.len() as f64;
    let (weights, intercept) = (&theta[..dim], theta[dim]);

    let mut grad = vec![0.0; dim + 1];
    for (x, &y) in features.iter().zip(targets) {
        let residual = (sigmoid(x.dot(weights) + intercept) - y) / n;
        for (i, v) in x.iter() {
            grad[i] += residual * v;
        }
        grad[dim] += residual;
    }

    for (g, w) in grad[..dim].iter_mut().zip(weights) {
        *g += l2 * w;
    }

    grad
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
