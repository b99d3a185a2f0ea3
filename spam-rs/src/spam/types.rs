//! Spam types and data structures

use serde::Serialize;
use uuid::Uuid;

use crate::corpus::Label;
use crate::model::ModelState;

/// Outcome of classifying one message. Probabilities are percentages rounded
/// to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub prediction: Label,
    pub spam_probability: f64,
    pub normal_probability: f64,
    /// The larger of the two probabilities
    pub confidence: f64,
    /// Training run of the model that produced this result
    pub run_id: Uuid,
}

impl PredictionResult {
    /// Build from raw class probabilities (indexed by [`Label::index`]) and
    /// the predicted label
    pub fn from_probabilities(prediction: Label, probabilities: [f64; 2], run_id: Uuid) -> Self {
        let spam_probability = as_percentage(probabilities[Label::Spam.index()]);
        let normal_probability = as_percentage(probabilities[Label::Normal.index()]);

        Self {
            prediction,
            spam_probability,
            normal_probability,
            confidence: spam_probability.max(normal_probability),
            run_id,
        }
    }

    pub fn is_spam(&self) -> bool {
        self.prediction == Label::Spam
    }
}

fn as_percentage(probability: f64) -> f64 {
    (probability * 1000.0).round() / 10.0
}

/// Resident model summary for health reporting
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub state: ModelState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,
}
