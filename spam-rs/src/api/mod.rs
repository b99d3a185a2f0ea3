//! REST API module for spam-rs
//!
//! Provides HTTP endpoints for training and message analysis

pub mod handlers;
pub mod server;
pub mod spam;

pub use handlers::{ApiError, AppState};
pub use server::ApiServer;
pub use spam::ApiResponse;
