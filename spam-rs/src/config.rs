//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpamError};

/// Main service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub vectorizer: VectorizerConfig,
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:5001")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted model artifacts
    #[serde(default = "default_model_dir")]
    pub model_dir: String,
    /// Optional JSON corpus replacing the built-in one
    #[serde(default)]
    pub corpus_path: Option<String>,
}

/// TF-IDF vectorizer hyperparameters
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct VectorizerConfig {
    #[serde(default = "default_ngram_min")]
    pub ngram_min: usize,
    #[serde(default = "default_ngram_max")]
    pub ngram_max: usize,
    /// Vocabulary cap
    #[serde(default = "default_max_features")]
    pub max_features: usize,
    /// Minimum number of documents a term must appear in
    #[serde(default = "default_min_df")]
    pub min_df: usize,
    /// Maximum fraction of documents a term may appear in
    #[serde(default = "default_max_df")]
    pub max_df: f64,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Use ln((1+N)/(1+df)) + 1 instead of ln(N/df)
    #[serde(default)]
    pub smooth_idf: bool,
}

/// Split and learner hyperparameters
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TrainingConfig {
    /// Fraction of each class held out for evaluation
    #[serde(default = "default_test_ratio")]
    pub test_ratio: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Logistic regression iteration cap
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    /// Gradient magnitude below which logistic regression stops early
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Inverse L2 regularization strength for logistic regression
    #[serde(default = "default_c")]
    pub c: f64,
    /// Additive smoothing for naive Bayes
    #[serde(default = "default_nb_alpha")]
    pub nb_alpha: f64,
    /// Soft-voting weights, [logistic, naive bayes]
    #[serde(default = "default_voting_weights")]
    pub voting_weights: [f64; 2],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// "pretty", "compact" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:5001".to_string()
}

fn default_model_dir() -> String {
    "models".to_string()
}

fn default_ngram_min() -> usize {
    1
}

fn default_ngram_max() -> usize {
    3
}

fn default_max_features() -> usize {
    1000
}

fn default_min_df() -> usize {
    1
}

fn default_max_df() -> f64 {
    0.9
}

fn default_true() -> bool {
    true
}

fn default_test_ratio() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}

fn default_max_iter() -> usize {
    200
}

fn default_tolerance() -> f64 {
    1e-4
}

fn default_c() -> f64 {
    1.0
}

fn default_nb_alpha() -> f64 {
    1.0
}

fn default_voting_weights() -> [f64; 2] {
    [0.5, 0.5]
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            model_dir: default_model_dir(),
            corpus_path: None,
        }
    }
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            ngram_min: default_ngram_min(),
            ngram_max: default_ngram_max(),
            max_features: default_max_features(),
            min_df: default_min_df(),
            max_df: default_max_df(),
            lowercase: true,
            smooth_idf: false,
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            test_ratio: default_test_ratio(),
            seed: default_seed(),
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
            c: default_c(),
            nb_alpha: default_nb_alpha(),
            voting_weights: default_voting_weights(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            vectorizer: VectorizerConfig::default(),
            training: TrainingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        self.training.validate()?;

        if self.storage.model_dir.trim().is_empty() {
            return Err(SpamError::Config("storage.model_dir is empty".to_string()));
        }

        Ok(())
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ngram_min == 0 || self.ngram_min > self.ngram_max {
            return Err(SpamError::Config(format!(
                "Invalid n-gram range ({}, {})",
                self.ngram_min, self.ngram_max
            )));
        }
        if self.max_features == 0 {
            return Err(SpamError::Config("max_features must be positive".to_string()));
        }
        if self.min_df == 0 {
            return Err(SpamError::Config("min_df must be at least 1".to_string()));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(SpamError::Config(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        Ok(())
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.test_ratio > 0.0 && self.test_ratio < 1.0) {
            return Err(SpamError::Config(format!(
                "test_ratio must be in (0, 1), got {}",
                self.test_ratio
            )));
        }
        if self.max_iter == 0 {
            return Err(SpamError::Config("max_iter must be positive".to_string()));
        }
        if self.c <= 0.0 {
            return Err(SpamError::Config("c must be positive".to_string()));
        }
        if self.nb_alpha <= 0.0 {
            return Err(SpamError::Config("nb_alpha must be positive".to_string()));
        }
        if self.voting_weights.iter().any(|w| !(*w > 0.0)) {
            return Err(SpamError::Config(format!(
                "voting weights must be positive, got {:?}",
                self.voting_weights
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.vectorizer.ngram_min, 1);
        assert_eq!(config.vectorizer.ngram_max, 3);
        assert_eq!(config.vectorizer.max_features, 1000);
        assert_eq!(config.training.seed, 42);
        assert_eq!(config.training.voting_weights, [0.5, 0.5]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
listen_addr = "127.0.0.1:8080"

[vectorizer]
max_features = 50
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.vectorizer.max_features, 50);
        assert_eq!(config.vectorizer.ngram_max, 3);
        assert_eq!(config.training.max_iter, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_ngram_range() {
        let mut config = Config::default();
        config.vectorizer.ngram_min = 3;
        config.vectorizer.ngram_max = 1;
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));
    }

    #[test]
    fn test_invalid_test_ratio() {
        let mut config = Config::default();
        config.training.test_ratio = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config: Config = toml::from_str(include_str!("../config.example.toml")).unwrap();
        assert_eq!(config.vectorizer, VectorizerConfig::default());
        assert_eq!(config.training, TrainingConfig::default());
        assert_eq!(config.server.listen_addr, default_listen_addr());
        assert!(config.storage.corpus_path.is_none());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[training]\nseed = 7\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.training.seed, 7);
        assert_eq!(config.training.test_ratio, 0.2);
    }
}
