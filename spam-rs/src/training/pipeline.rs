//! Training run state machine
//!
//! `Idle -> Splitting -> Extracting -> Fitting -> Evaluating -> Persisting -> Ready`,
//! with `Failed` reachable from every non-terminal stage. A failed run never
//! touches the resident or persisted model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::metrics::{ClassificationReport, ConfusionMatrix};
use super::split::stratified_split;
use crate::classifier::{ProbabilisticClassifier, SoftVotingEnsemble};
use crate::config::{Config, TrainingConfig, VectorizerConfig};
use crate::corpus::Corpus;
use crate::error::{Result, SpamError};
use crate::features::TfidfVectorizer;
use crate::model::{ModelBundle, ModelRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStage {
    Idle,
    Splitting,
    Extracting,
    Fitting,
    Evaluating,
    Persisting,
    Ready,
    Failed,
}

impl TrainingStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, TrainingStage::Ready | TrainingStage::Failed)
    }
}

impl fmt::Display for TrainingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrainingStage::Idle => "idle",
            TrainingStage::Splitting => "splitting",
            TrainingStage::Extracting => "extracting",
            TrainingStage::Fitting => "fitting",
            TrainingStage::Evaluating => "evaluating",
            TrainingStage::Persisting => "persisting",
            TrainingStage::Ready => "ready",
            TrainingStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Summary of a successful training run
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub run_id: Uuid,
    pub accuracy: f64,
    pub confusion_matrix: ConfusionMatrix,
    pub classification_report: ClassificationReport,
    pub train_size: usize,
    pub test_size: usize,
    pub vocabulary_size: usize,
    /// Whether the logistic learner reached its tolerance
    pub converged: bool,
    pub trained_at: DateTime<Utc>,
}

/// Tracks the current stage of one run
#[derive(Debug)]
struct TrainingRun {
    run_id: Uuid,
    stage: TrainingStage,
}

impl TrainingRun {
    fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    fn with_id(run_id: Uuid) -> Self {
        Self {
            run_id,
            stage: TrainingStage::Idle,
        }
    }

    fn advance(&mut self, next: TrainingStage) {
        debug!("Training run {}: {} -> {}", self.run_id, self.stage, next);
        self.stage = next;
    }

    /// Move to `Failed` and attach the failing stage to the cause
    fn fail(&mut self, cause: SpamError) -> SpamError {
        let stage = self.stage;
        self.advance(TrainingStage::Failed);
        error!("Training run {} failed while {}: {}", self.run_id, stage, cause);

        match cause {
            SpamError::Training(_) => cause,
            other => SpamError::Training(format!("{} stage: {}", stage, other)),
        }
    }

    /// Move to `Failed` after the run's worker itself died
    fn abort(&mut self, reason: String) -> SpamError {
        self.advance(TrainingStage::Failed);
        error!("Training run {} aborted: {}", self.run_id, reason);
        SpamError::Internal(reason)
    }
}

/// Fitted artifacts plus their evaluation, before persistence
pub struct FittedRun {
    pub bundle: ModelBundle,
    pub report: TrainingReport,
}

/// Orchestrates split, extraction, fitting, evaluation and persistence
#[derive(Debug, Clone)]
pub struct TrainingPipeline {
    vectorizer: VectorizerConfig,
    training: TrainingConfig,
}

impl TrainingPipeline {
    pub fn new(vectorizer: VectorizerConfig, training: TrainingConfig) -> Self {
        Self {
            vectorizer,
            training,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.vectorizer.clone(), config.training.clone())
    }

    /// Run every stage and install the result in `registry`. CPU-bound
    /// stages run on the blocking thread pool.
    pub async fn run(&self, corpus: Arc<Corpus>, registry: &ModelRegistry) -> Result<TrainingReport> {
        let pipeline = self.clone();
        let run_id = Uuid::new_v4();
        let fitted = tokio::task::spawn_blocking(move || {
            let mut run = TrainingRun::with_id(run_id);
            pipeline.fit_stages(&mut run, &corpus).map(|fitted| (run, fitted))
        })
        .await
        .map_err(|e| TrainingRun::with_id(run_id).abort(format!("Training task panicked: {}", e)))??;

        let (mut run, FittedRun { bundle, report }) = fitted;

        run.advance(TrainingStage::Persisting);
        if let Err(e) = registry.persist_and_install(bundle).await {
            return Err(run.fail(e));
        }
        run.advance(TrainingStage::Ready);

        info!(
            "Training run {} finished: accuracy {:.3} on {} test samples",
            report.run_id, report.accuracy, report.test_size
        );
        Ok(report)
    }

    /// Run the in-memory stages (split through evaluation) without touching
    /// any shared state
    pub fn fit(&self, corpus: &Corpus) -> Result<FittedRun> {
        let mut run = TrainingRun::new();
        self.fit_stages(&mut run, corpus)
    }

    fn fit_stages(&self, run: &mut TrainingRun, corpus: &Corpus) -> Result<FittedRun> {
        info!("Training run {} started on {} samples", run.run_id, corpus.len());

        run.advance(TrainingStage::Splitting);
        let split = stratified_split(corpus, self.training.test_ratio, self.training.seed)
            .map_err(|e| run.fail(e))?;

        // Extractor only ever sees the training partition
        run.advance(TrainingStage::Extracting);
        let extractor = TfidfVectorizer::new(self.vectorizer.clone())
            .fit(&split.train_texts())
            .map_err(|e| run.fail(e))?;
        debug!(
            "Training run {}: {} terms from {} documents",
            run.run_id,
            extractor.vocabulary_size(),
            extractor.document_count()
        );
        let train_features = extractor.transform_batch(&split.train_texts());

        run.advance(TrainingStage::Fitting);
        let ensemble = SoftVotingEnsemble::fit(&train_features, &split.train_labels(), &self.training)
            .map_err(|e| run.fail(e))?;

        run.advance(TrainingStage::Evaluating);
        let test_features = extractor.transform_batch(&split.test_texts());
        let predicted: Vec<_> = test_features.iter().map(|x| ensemble.predict(x)).collect();
        let confusion_matrix = ConfusionMatrix::from_labels(&split.test_labels(), &predicted);
        let classification_report = ClassificationReport::from_confusion(&confusion_matrix);

        let trained_at = Utc::now();
        let report = TrainingReport {
            run_id: run.run_id,
            accuracy: confusion_matrix.accuracy(),
            confusion_matrix,
            classification_report,
            train_size: split.train.len(),
            test_size: split.test.len(),
            vocabulary_size: extractor.vocabulary_size(),
            converged: ensemble.converged(),
            trained_at,
        };

        Ok(FittedRun {
            bundle: ModelBundle::new(run.run_id, trained_at, extractor, ensemble),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Label, Sample};

    fn pipeline() -> TrainingPipeline {
        TrainingPipeline::from_config(&Config::default())
    }

    #[test]
    fn test_fit_builtin_corpus() {
        let fitted = pipeline().fit(&Corpus::builtin()).unwrap();
        let report = &fitted.report;

        assert_eq!(report.train_size, 86);
        assert_eq!(report.test_size, 21);
        assert_eq!(report.confusion_matrix.total(), 21);
        assert!(report.accuracy > 0.5);
        assert!(report.vocabulary_size > 0);
        assert!(report.vocabulary_size <= 1000);
        assert_eq!(fitted.bundle.run_id(), report.run_id);
    }

    #[test]
    fn test_fit_is_reproducible() {
        let a = pipeline().fit(&Corpus::builtin()).unwrap().report;
        let b = pipeline().fit(&Corpus::builtin()).unwrap().report;

        assert_eq!(a.confusion_matrix, b.confusion_matrix);
        assert_eq!(a.accuracy, b.accuracy);
        assert_eq!(a.vocabulary_size, b.vocabulary_size);
    }

    #[test]
    fn test_single_class_corpus_fails() {
        let corpus = Corpus::new(vec![
            Sample::new("Bedava ödül kazan!", Label::Spam),
            Sample::new("Hemen tıkla kazan!", Label::Spam),
            Sample::new("Bonus fırsatı kaçırma!", Label::Spam),
        ])
        .unwrap();

        let err = pipeline().fit(&corpus).err().unwrap();
        assert!(matches!(err, SpamError::Training(_)));
    }

    #[test]
    fn test_aborted_run_is_failed_internal_error() {
        let run_id = Uuid::new_v4();
        let mut run = TrainingRun::with_id(run_id);
        run.advance(TrainingStage::Fitting);

        let err = run.abort("worker panicked".to_string());

        assert_eq!(run.stage, TrainingStage::Failed);
        assert_eq!(run.run_id, run_id);
        assert!(matches!(err, SpamError::Internal(ref msg) if msg == "worker panicked"));
    }

    #[test]
    fn test_failed_stage_is_named_in_error() {
        let mut run = TrainingRun::new();
        run.advance(TrainingStage::Persisting);

        let err = run.fail(SpamError::Internal("disk full".to_string()));

        assert_eq!(run.stage, TrainingStage::Failed);
        assert!(matches!(err, SpamError::Training(ref msg) if msg.contains("persisting stage")));
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(TrainingStage::Extracting.to_string(), "extracting");
        assert!(TrainingStage::Failed.is_terminal());
        assert!(!TrainingStage::Persisting.is_terminal());
    }
}
