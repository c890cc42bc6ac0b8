//! Client-side session state for VibeFlow frontends
//!
//! [`SessionContext`] tracks who is logged in, delegates credential exchange
//! to [`vibeflow_client::ApiClient`], and mirrors the identity record into the
//! injected storage so a reloaded frontend can restore it without a network
//! round trip. UI layers observe state transitions through [`SessionContext::subscribe`].

pub mod context;

pub use context::{SessionContext, SessionState, SubscriptionId, User};
