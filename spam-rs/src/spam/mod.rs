//! Spam classification service
//!
//! Ties the training pipeline, the resident model and the model store
//! together behind [`SpamManager`].

pub mod manager;
pub mod types;

pub use manager::SpamManager;
pub use types::*;
