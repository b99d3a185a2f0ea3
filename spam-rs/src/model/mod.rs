//! Fitted model pair, its persistence and the process-wide resident slot

pub mod registry;
pub mod store;

pub use registry::{ModelRegistry, ModelState};
pub use store::{ModelStore, ENSEMBLE_KEY, EXTRACTOR_KEY};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::classifier::SoftVotingEnsemble;
use crate::features::TfidfModel;

/// Extractor and ensemble produced by the same training run. Never mutated
/// after construction; a retrain builds a new bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelBundle {
    run_id: Uuid,
    trained_at: DateTime<Utc>,
    extractor: TfidfModel,
    ensemble: SoftVotingEnsemble,
}

impl ModelBundle {
    pub fn new(
        run_id: Uuid,
        trained_at: DateTime<Utc>,
        extractor: TfidfModel,
        ensemble: SoftVotingEnsemble,
    ) -> Self {
        Self {
            run_id,
            trained_at,
            extractor,
            ensemble,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    pub fn extractor(&self) -> &TfidfModel {
        &self.extractor
    }

    pub fn ensemble(&self) -> &SoftVotingEnsemble {
        &self.ensemble
    }
}
