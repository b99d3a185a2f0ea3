//! spam-rs: TF-IDF spam classifier served over HTTP
//!
//! Trains a soft-voting ensemble (logistic regression + multinomial naive
//! Bayes) on TF-IDF features of a labeled e-mail corpus and classifies
//! single messages as `SPAM` or `NORMAL`.
//!
//! # Example
//!
//! ```no_run
//! use spam_rs::config::Config;
//! use spam_rs::SpamManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = SpamManager::from_config(&Config::default())?;
//!
//!     let report = manager.train().await?;
//!     println!("accuracy: {:.3}", report.accuracy);
//!
//!     let result = manager.classify("Bedava ödül kazan!").await?;
//!     println!("{} ({}%)", result.prediction, result.confidence);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`corpus`]: Labeled samples and the built-in corpus
//! - [`features`]: Tokenization and TF-IDF extraction
//! - [`classifier`]: Base learners and the voting ensemble
//! - [`training`]: Split, fit, evaluate, persist
//! - [`model`]: Model bundle, store and resident slot
//! - [`spam`]: Training and inference entry points
//! - [`api`]: HTTP endpoints

pub mod api;
pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod model;
pub mod spam;
pub mod training;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
pub use spam::SpamManager;
