// web_app/api/backend.rs - Process-wide backend client
//
// The server binary installs one client at startup; server functions pick it
// up from here when it is not in the Leptos context.

use std::sync::Mutex;
use std::sync::OnceLock;

use super::client::BackendClient;

static BACKEND: OnceLock<BackendClient> = OnceLock::new();
static TEST_BACKEND_OVERRIDE: Mutex<Option<BackendClient>> = Mutex::new(None);

/// Initialize the global backend client
pub fn init_backend(client: BackendClient) {
    let endpoint = client.config().endpoint.clone();
    if BACKEND.set(client).is_err() {
        tracing::warn!("Backend client already initialized");
    } else {
        tracing::info!("Backend client initialized for {}", endpoint);
    }
}

/// Set a client override for testing
pub fn set_test_backend(client: BackendClient) {
    match TEST_BACKEND_OVERRIDE.lock() {
        Ok(mut guard) => *guard = Some(client),
        Err(poisoned) => *poisoned.into_inner() = Some(client),
    }
}

/// Get the global backend client
pub fn get_backend() -> Option<BackendClient> {
    // Check for test override first
    if let Ok(guard) = TEST_BACKEND_OVERRIDE.lock() {
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = BACKEND.get().cloned();
    if client.is_none() {
        tracing::warn!("Global backend client is empty!");
    }
    client
}
