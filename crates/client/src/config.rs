//! Client configuration constants

/// Storage keys for persisted session state
pub struct StorageKeys;

impl StorageKeys {
    /// Access token presented as the bearer credential
    pub const ACCESS_TOKEN: &'static str = "access_token";

    /// Refresh token returned at login; persisted but not consumed by this
    /// client (no refresh flow exists)
    pub const REFRESH_TOKEN: &'static str = "refresh_token";

    /// Denormalized current-user record, JSON-encoded
    pub const USER_DATA: &'static str = "user_data";
}
