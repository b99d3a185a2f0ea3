//! Integration tests for training and inference

use spam_rs::config::Config;
use spam_rs::corpus::{Corpus, Label, Sample};
use spam_rs::model::ModelStore;
use spam_rs::training::TrainingPipeline;
use spam_rs::{SpamError, SpamManager};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn manager_with(corpus: Corpus, dir: &Path) -> SpamManager {
    SpamManager::new(
        TrainingPipeline::from_config(&Config::default()),
        corpus,
        ModelStore::new(dir),
    )
}

/// Two short messages, repeated so each class can be split
fn tiny_corpus() -> Corpus {
    let mut samples = Vec::new();
    for _ in 0..5 {
        samples.push(Sample::new("Bedava ödül kazan!", Label::Spam));
        samples.push(Sample::new("Toplantı saat 10'da", Label::Normal));
    }
    Corpus::new(samples).unwrap()
}

#[tokio::test]
async fn test_tiny_corpus_classifies_spam() {
    let dir = TempDir::new().unwrap();
    let manager = manager_with(tiny_corpus(), dir.path());

    manager.train().await.unwrap();
    let result = manager.classify("Bedava ödül kazan şimdi!").await.unwrap();

    assert_eq!(result.prediction, Label::Spam);
    assert!(result.spam_probability > result.normal_probability);
}

#[tokio::test]
async fn test_concurrent_training_leaves_consistent_state() {
    let dir = TempDir::new().unwrap();
    let manager = Arc::new(manager_with(Corpus::builtin(), dir.path()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.train().await.unwrap() })
        })
        .collect();

    let mut reports = Vec::new();
    for handle in handles {
        reports.push(handle.await.unwrap());
    }

    // Every run finished, and the resident model is the one on disk
    let resident = manager.registry().run_id().await.unwrap();
    let persisted = ModelStore::new(dir.path()).load().await.unwrap();
    assert_eq!(resident, persisted.run_id());
    assert!(reports.iter().any(|r| r.run_id == resident));
    assert!(reports.windows(2).all(|w| w[0].confusion_matrix == w[1].confusion_matrix));
}

#[tokio::test]
async fn test_inference_during_training_sees_whole_model() {
    let dir = TempDir::new().unwrap();
    let manager = Arc::new(manager_with(Corpus::builtin(), dir.path()));
    let first = manager.train().await.unwrap();

    let trainer = {
        let manager = Arc::clone(&manager);
        tokio::spawn(async move { manager.train().await.unwrap() })
    };

    let mut seen = Vec::new();
    for _ in 0..20 {
        let result = manager.classify("Hemen tıkla, bonus kazan").await.unwrap();
        seen.push(result.run_id);
        tokio::task::yield_now().await;
    }
    let second = trainer.await.unwrap();

    assert!(seen.iter().all(|id| *id == first.run_id || *id == second.run_id));
    assert_eq!(manager.registry().run_id().await, Some(second.run_id));
}

#[tokio::test]
async fn test_single_class_corpus_fails_training() {
    let dir = TempDir::new().unwrap();
    let corpus = Corpus::new(vec![
        Sample::new("Bedava ödül kazan!", Label::Spam),
        Sample::new("Hemen tıkla!", Label::Spam),
        Sample::new("Bonus fırsatı!", Label::Spam),
    ])
    .unwrap();
    let manager = manager_with(corpus, dir.path());

    assert!(matches!(manager.train().await, Err(SpamError::Training(_))));
    assert!(!ModelStore::new(dir.path()).exists().await);
}

#[tokio::test]
async fn test_corpus_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.json");
    std::fs::write(
        &path,
        r#"[
            {"text": "Bedava ödül kazan!", "label": "SPAM"},
            {"text": "Toplantı saat 10'da", "label": "NORMAL"}
        ]"#,
    )
    .unwrap();

    let corpus = Corpus::from_json_file(&path).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.label_counts(), [1, 1]);
}

#[tokio::test]
async fn test_manager_from_config_uses_model_dir() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.storage.model_dir = dir.path().join("models").to_string_lossy().into_owned();

    let manager = SpamManager::from_config(&config).unwrap();
    let report = manager.train().await.unwrap();

    let persisted = ModelStore::new(dir.path().join("models")).load().await.unwrap();
    assert_eq!(persisted.run_id(), report.run_id);
}
