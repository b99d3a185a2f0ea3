//! On-disk model store
//!
//! Two artifacts under fixed keys in one directory, each wrapped in an
//! envelope carrying the training run id. Writes go to a unique temporary file
//! and are renamed into place, so readers never observe a partial artifact.
//! The previous extractor is backed up while a pair is committed; a load that
//! finds mismatched artifacts falls back to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ModelBundle;
use crate::classifier::SoftVotingEnsemble;
use crate::error::{Result, SpamError};
use crate::features::TfidfModel;

/// Key of the fitted TF-IDF extractor
pub const EXTRACTOR_KEY: &str = "tfidf_vectorizer.bin";
/// Key of the fitted classifier ensemble
pub const ENSEMBLE_KEY: &str = "spam_model.bin";
/// Previous extractor, present only while a new pair is being committed
const EXTRACTOR_BACKUP_KEY: &str = "tfidf_vectorizer.bin.bak";

#[derive(Debug, Serialize, Deserialize)]
struct Artifact<T> {
    run_id: Uuid,
    created_at: DateTime<Utc>,
    payload: T,
}

/// Temporary files of a pair not yet moved into place
struct Staged {
    extractor: PathBuf,
    ensemble: PathBuf,
}

impl Staged {
    async fn discard(&self) {
        discard(&self.extractor).await;
        discard(&self.ensemble).await;
    }
}

pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Persist both artifacts of `bundle`, replacing any previous ones. If
    /// the pair cannot be committed, the previous pair stays loadable.
    pub async fn save(&self, bundle: &ModelBundle) -> Result<()> {
        let staged = self.stage_bundle(bundle).await?;
        self.commit(staged).await?;

        info!(
            "Persisted model {} to {}",
            bundle.run_id(),
            self.dir.display()
        );
        Ok(())
    }

    /// Write both artifacts of `bundle` next to their final paths
    async fn stage_bundle(&self, bundle: &ModelBundle) -> Result<Staged> {
        let extractor = bincode::serialize(&Artifact {
            run_id: bundle.run_id(),
            created_at: bundle.trained_at(),
            payload: bundle.extractor(),
        })?;
        let ensemble = bincode::serialize(&Artifact {
            run_id: bundle.run_id(),
            created_at: bundle.trained_at(),
            payload: bundle.ensemble(),
        })?;

        fs::create_dir_all(&self.dir).await.map_err(|e| {
            SpamError::Internal(format!("Failed to create model directory {:?}: {}", self.dir, e))
        })?;

        let staged_extractor = self.stage(EXTRACTOR_KEY, &extractor).await?;
        match self.stage(ENSEMBLE_KEY, &ensemble).await {
            Ok(staged_ensemble) => Ok(Staged {
                extractor: staged_extractor,
                ensemble: staged_ensemble,
            }),
            Err(e) => {
                discard(&staged_extractor).await;
                Err(e)
            }
        }
    }

    /// Move a staged pair into place. The previous extractor is kept as a
    /// backup until the ensemble rename succeeds and is put back otherwise.
    async fn commit(&self, staged: Staged) -> Result<()> {
        let extractor_path = self.path(EXTRACTOR_KEY);
        let backup_path = self.path(EXTRACTOR_BACKUP_KEY);

        let had_previous = match fs::rename(&extractor_path, &backup_path).await {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                staged.discard().await;
                return Err(e.into());
            }
        };

        let renamed = match fs::rename(&staged.extractor, &extractor_path).await {
            Ok(()) => fs::rename(&staged.ensemble, self.path(ENSEMBLE_KEY)).await,
            Err(e) => Err(e),
        };

        if let Err(e) = renamed {
            self.restore_extractor(had_previous).await;
            staged.discard().await;
            return Err(e.into());
        }

        if had_previous {
            discard(&backup_path).await;
        }
        Ok(())
    }

    async fn restore_extractor(&self, had_previous: bool) {
        let extractor_path = self.path(EXTRACTOR_KEY);
        if !had_previous {
            discard(&extractor_path).await;
            return;
        }
        if let Err(e) = fs::rename(self.path(EXTRACTOR_BACKUP_KEY), &extractor_path).await {
            warn!(
                "Failed to restore previous extractor in {}: {}",
                self.dir.display(),
                e
            );
        }
    }

    /// Load both artifacts. Missing, undecodable or mismatched artifacts are
    /// all reported as [`SpamError::ModelUnavailable`].
    pub async fn load(&self) -> Result<ModelBundle> {
        let mut extractor: Artifact<TfidfModel> = self.read_artifact(EXTRACTOR_KEY).await?;
        let ensemble: Artifact<SoftVotingEnsemble> = self.read_artifact(ENSEMBLE_KEY).await?;

        if extractor.run_id != ensemble.run_id {
            warn!(
                "Stored artifacts come from different runs ({} vs {})",
                extractor.run_id, ensemble.run_id
            );

            // An interrupted commit leaves the matching extractor in the backup
            match self.read_artifact::<TfidfModel>(EXTRACTOR_BACKUP_KEY).await {
                Ok(previous) if previous.run_id == ensemble.run_id => {
                    info!("Recovered extractor of model {} from backup", previous.run_id);
                    if let Err(e) =
                        fs::rename(self.path(EXTRACTOR_BACKUP_KEY), self.path(EXTRACTOR_KEY)).await
                    {
                        warn!("Failed to put back recovered extractor: {}", e);
                    }
                    extractor = previous;
                }
                _ => {
                    return Err(SpamError::ModelUnavailable(
                        "Stored model artifacts come from different training runs".to_string(),
                    ));
                }
            }
        }

        debug!("Loaded model {} from {}", extractor.run_id, self.dir.display());
        Ok(ModelBundle::new(
            extractor.run_id,
            extractor.created_at,
            extractor.payload,
            ensemble.payload,
        ))
    }

    /// Write an opaque blob under `key` atomically
    pub async fn write_blob(&self, key: &str, data: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        let staged = self.stage(key, data).await?;
        if let Err(e) = fs::rename(&staged, self.path(key)).await {
            discard(&staged).await;
            return Err(e.into());
        }
        Ok(())
    }

    pub async fn read_blob(&self, key: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.path(key)).await?)
    }

    /// Whether both artifacts are present
    pub async fn exists(&self) -> bool {
        fs::metadata(self.path(EXTRACTOR_KEY)).await.is_ok()
            && fs::metadata(self.path(ENSEMBLE_KEY)).await.is_ok()
    }

    async fn stage(&self, key: &str, data: &[u8]) -> Result<PathBuf> {
        let tmp_path = self.dir.join(format!("{}.{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, data).await {
            discard(&tmp_path).await;
            return Err(e.into());
        }
        Ok(tmp_path)
    }

    async fn read_artifact<T>(&self, key: &str) -> Result<Artifact<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let bytes = match self.read_blob(key).await {
            Ok(bytes) => bytes,
            Err(SpamError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SpamError::ModelUnavailable(format!(
                    "No trained model found ({} is missing)",
                    key
                )));
            }
            Err(e) => {
                return Err(SpamError::ModelUnavailable(format!(
                    "Failed to read {}: {}",
                    key, e
                )));
            }
        };

        bincode::deserialize(&bytes).map_err(|e| {
            warn!("Stored artifact {} is corrupt: {}", key, e);
            SpamError::ModelUnavailable(format!("Stored artifact {} is corrupt", key))
        })
    }
}

async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Failed to remove temporary file {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::corpus::Corpus;
    use crate::training::TrainingPipeline;

    fn bundle() -> ModelBundle {
        TrainingPipeline::from_config(&Config::default())
            .fit(&Corpus::builtin())
            .unwrap()
            .bundle
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let bundle = bundle();

        assert!(!store.exists().await);
        store.save(&bundle).await.unwrap();
        assert!(store.exists().await);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, bundle);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        store.save(&bundle()).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| !n.ends_with(".tmp")));
    }

    #[tokio::test]
    async fn test_missing_model_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("nothing-here"));
        assert!(matches!(store.load().await, Err(SpamError::ModelUnavailable(_))));
    }

    #[tokio::test]
    async fn test_corrupt_model_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        store.save(&bundle()).await.unwrap();
        store.write_blob(ENSEMBLE_KEY, b"not a model").await.unwrap();

        assert!(matches!(store.load().await, Err(SpamError::ModelUnavailable(_))));
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_failed_ensemble_rename_keeps_previous_pair() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let previous = bundle();
        store.save(&previous).await.unwrap();

        // Extractor rename succeeds, ensemble rename finds nothing to move
        let staged = store.stage_bundle(&bundle()).await.unwrap();
        std::fs::remove_file(&staged.ensemble).unwrap();
        assert!(store.commit(staged).await.is_err());

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.run_id(), previous.run_id());
        assert_eq!(file_names(dir.path()), vec![ENSEMBLE_KEY, EXTRACTOR_KEY]);
    }

    #[tokio::test]
    async fn test_failed_first_commit_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());

        let staged = store.stage_bundle(&bundle()).await.unwrap();
        std::fs::remove_file(&staged.ensemble).unwrap();
        assert!(store.commit(staged).await.is_err());

        assert!(!store.exists().await);
        assert!(file_names(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_interrupted_commit_recovers_from_backup() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let previous = bundle();
        store.save(&previous).await.unwrap();

        // State after the extractor rename of a newer run, before the ensemble one
        let newer = ModelStore::new(other.path());
        newer.save(&bundle()).await.unwrap();
        std::fs::rename(
            dir.path().join(EXTRACTOR_KEY),
            dir.path().join(EXTRACTOR_BACKUP_KEY),
        )
        .unwrap();
        let newer_extractor = newer.read_blob(EXTRACTOR_KEY).await.unwrap();
        std::fs::write(dir.path().join(EXTRACTOR_KEY), newer_extractor).unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.run_id(), previous.run_id());
        assert_eq!(loaded.extractor(), previous.extractor());

        // The recovered pair is back in place for the next commit
        assert_eq!(file_names(dir.path()), vec![ENSEMBLE_KEY, EXTRACTOR_KEY]);
        assert_eq!(store.load().await.unwrap().run_id(), previous.run_id());
    }

    #[tokio::test]
    async fn test_mismatched_runs_are_unavailable() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let store_a = ModelStore::new(dir_a.path());
        let store_b = ModelStore::new(dir_b.path());
        store_a.save(&bundle()).await.unwrap();
        store_b.save(&bundle()).await.unwrap();

        let foreign = store_b.read_blob(ENSEMBLE_KEY).await.unwrap();
        store_a.write_blob(ENSEMBLE_KEY, &foreign).await.unwrap();

        assert!(matches!(store_a.load().await, Err(SpamError::ModelUnavailable(_))));
    }
}
