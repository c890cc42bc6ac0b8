//! HTTP client for the VibeFlow fine-tuning API
//!
//! Provides a typed request gateway over the backend's REST surface. Every
//! endpoint method resolves to an [`ApiResponse`] tagged result rather than
//! returning a `Result` — transport failures and HTTP error statuses are both
//! normalized into the error arm, so callers never have to catch anything.

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod storage;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder};
pub use config::StorageKeys;
pub use error::ClientError;
pub use response::ApiResponse;
pub use storage::{MemoryStorage, TokenStorage};
