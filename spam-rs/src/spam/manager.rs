//! Spam manager: training and inference entry points
//!
//! Training runs are serialized; inference only reads the resident model and
//! never mutates it.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::types::{ModelStatus, PredictionResult};
use crate::classifier::{argmax, ProbabilisticClassifier};
use crate::config::Config;
use crate::corpus::Corpus;
use crate::error::{Result, SpamError};
use crate::model::{ModelRegistry, ModelStore};
use crate::training::{TrainingPipeline, TrainingReport};

/// Spam manager
pub struct SpamManager {
    pipeline: TrainingPipeline,
    corpus: Arc<Corpus>,
    registry: Arc<ModelRegistry>,
    training_lock: Mutex<()>,
}

impl SpamManager {
    /// Create a manager training on `corpus` and persisting to `store`
    pub fn new(pipeline: TrainingPipeline, corpus: Corpus, store: ModelStore) -> Self {
        Self {
            pipeline,
            corpus: Arc::new(corpus),
            registry: Arc::new(ModelRegistry::new(store)),
            training_lock: Mutex::new(()),
        }
    }

    /// Build from configuration, loading the corpus file if one is configured
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let corpus = match &config.storage.corpus_path {
            Some(path) => Corpus::from_json_file(path)?,
            None => Corpus::builtin(),
        };

        Ok(Self::new(
            TrainingPipeline::from_config(config),
            corpus,
            ModelStore::new(&config.storage.model_dir),
        ))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Try to make a persisted model resident. Returns whether one is ready.
    pub async fn warm_up(&self) -> bool {
        match self.registry.get_or_load().await {
            Ok(bundle) => {
                info!("Model {} ready", bundle.run_id());
                true
            }
            Err(e) => {
                info!("No model loaded at startup ({}), train first", e);
                false
            }
        }
    }

    /// Retrain on the corpus and replace the resident and persisted model.
    /// Concurrent calls wait for the run in flight.
    pub async fn train(&self) -> Result<TrainingReport> {
        let _guard = match self.training_lock.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                info!("Training already in progress, waiting for it to finish");
                self.training_lock.lock().await
            }
        };

        self.pipeline
            .run(Arc::clone(&self.corpus), &self.registry)
            .await
    }

    /// Classify one message with the resident model
    pub async fn classify(&self, text: &str) -> Result<PredictionResult> {
        if text.trim().is_empty() {
            return Err(SpamError::Validation(
                "Email text must not be empty".to_string(),
            ));
        }

        let bundle = self.registry.get_or_load().await?;

        let features = bundle.extractor().transform(text);
        let probabilities = bundle.ensemble().predict_proba(&features);
        let prediction = argmax(&probabilities);

        debug!(
            "Classified message as {} ({} known terms, model {})",
            prediction,
            features.nnz(),
            bundle.run_id()
        );

        Ok(PredictionResult::from_probabilities(
            prediction,
            probabilities,
            bundle.run_id(),
        ))
    }

    pub async fn model_status(&self) -> ModelStatus {
        ModelStatus {
            state: self.registry.state().await,
            run_id: self.registry.run_id().await,
        }
    }
}
