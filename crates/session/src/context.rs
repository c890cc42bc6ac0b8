//! Session context and identity state

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use vibeflow_client::{ApiClient, ApiResponse, StorageKeys, TokenStorage};

/// Identity id recorded at login.
///
/// TODO: adopt the server-returned identity once the login response carries
/// one; the token endpoints currently return only the token pair.
const PLACEHOLDER_USER_ID: i64 = 1;

/// The logged-in identity as seen by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
}

/// Snapshot of the session state handed to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Current user, `None` when logged out
    pub user: Option<User>,
    /// `true` until [`SessionContext::init`] has run
    pub loading: bool,
}

/// Handle returned by [`SessionContext::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Reactive "who is logged in" state over an [`ApiClient`]
///
/// Both capabilities are threaded in at construction; nothing here reads
/// ambient global state. The client and the context should share the same
/// storage so the token and the identity record travel together.
pub struct SessionContext {
    client: Arc<ApiClient>,
    storage: Arc<dyn TokenStorage>,
    state: Mutex<SessionState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicUsize,
    initialized: AtomicBool,
}

impl SessionContext {
    /// Create a context in the loading state
    pub fn new(client: Arc<ApiClient>, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            client,
            storage,
            state: Mutex::new(SessionState {
                user: None,
                loading: true,
            }),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicUsize::new(0),
            initialized: AtomicBool::new(false),
        }
    }

    /// Restore a persisted session, then leave the loading state
    ///
    /// Adopts the stored identity record only when a stored access token also
    /// exists. The token is not verified against the backend. Runs once;
    /// later calls are no-ops.
    pub fn init(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }

        let restored = if self.storage.get(StorageKeys::ACCESS_TOKEN).is_some() {
            self.storage
                .get(StorageKeys::USER_DATA)
                .and_then(|raw| match serde_json::from_str::<User>(&raw) {
                    Ok(user) => Some(user),
                    Err(error) => {
                        warn!(%error, "discarding unreadable stored identity");
                        None
                    }
                })
        } else {
            None
        };

        self.update(|state| {
            state.user = restored;
            state.loading = false;
        });
    }

    /// Current user, `None` when logged out
    pub fn current_user(&self) -> Option<User> {
        self.state().user
    }

    /// Whether [`SessionContext::init`] has yet to run
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Whether a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Snapshot of the full state
    pub fn state(&self) -> SessionState {
        self.state.lock().expect("session state lock poisoned").clone()
    }

    /// Exchange credentials for a session
    ///
    /// On failure the error message is returned and state is unchanged. On
    /// success the identity record is adopted and persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        match self.client.login(email, password).await {
            ApiResponse::Error(message) => Err(message),
            ApiResponse::Data(_) => {
                debug!(email, "login succeeded");
                self.adopt_user(email);
                Ok(())
            }
        }
    }

    /// Create an account and adopt the identity
    ///
    /// Registration does not log the gateway in; the adopted identity mirrors
    /// the login path for UI purposes.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), String> {
        match self.client.register(email, password).await {
            ApiResponse::Error(message) => Err(message),
            ApiResponse::Data(_) => {
                debug!(email, "registration succeeded");
                self.adopt_user(email);
                Ok(())
            }
        }
    }

    /// End the session
    ///
    /// Clears the gateway's token entries and the stored identity record.
    /// Synchronous and infallible.
    pub fn logout(&self) {
        self.client.logout();
        self.storage.remove(StorageKeys::USER_DATA);
        self.update(|state| {
            state.user = None;
        });
    }

    /// Register a callback invoked with every state transition
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .lock()
            .expect("listener lock poisoned")
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered callback
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .lock()
            .expect("listener lock poisoned")
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn adopt_user(&self, email: &str) {
        let user = User {
            id: PLACEHOLDER_USER_ID,
            email: email.to_string(),
        };

        if let Ok(serialized) = serde_json::to_string(&user) {
            self.storage.set(StorageKeys::USER_DATA, &serialized);
        }

        self.update(|state| {
            state.user = Some(user);
        });
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self.state.lock().expect("session state lock poisoned");
            f(&mut state);
            state.clone()
        };

        let listeners = self.listeners.lock().expect("listener lock poisoned");
        for (_, listener) in listeners.iter() {
            listener(&snapshot);
        }
    }
}
