//! Training pipeline
//!
//! Splits a corpus, fits the TF-IDF extractor and the classifier ensemble on
//! the training partition, evaluates on the held-out partition and persists
//! the resulting model.

pub mod metrics;
pub mod pipeline;
pub mod split;

pub use metrics::{ClassMetrics, ClassificationReport, ConfusionMatrix};
pub use pipeline::{FittedRun, TrainingPipeline, TrainingReport, TrainingStage};
pub use split::{stratified_split, Split};
