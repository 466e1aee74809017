// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn backend() -> Result<crate::web_app::api::BackendClient, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::{backend, BackendClient};

    // First try to get from context (for testing or if manually set)
    if let Some(client) = use_context::<BackendClient>() {
        return Ok(client);
    }

    // Global client installed by the server binary
    if let Some(client) = backend::get_backend() {
        return Ok(client);
    }

    let req_result = extract().await;

    match req_result {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(client) = req.app_data::<Data<BackendClient>>() {
                return Ok(client.as_ref().clone());
            }
        },
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Scraper backend client not available"))
}

/// Forward one search to the scraper backend
///
/// Backend failures come back as `SearchOutcome::Failed` so the page can show
/// the scraper's own message. `Err` is reserved for this server function
/// itself being unavailable.
#[server(SearchListings, "/api")]
pub async fn search_listings(
    mode: SearchMode,
    term: String,
) -> Result<SearchOutcome, ServerFnError> {
    tracing::info!("Search request: mode={:?}, term='{}'", mode, term);

    let Some(request) = SearchRequest::new(mode, term) else {
        tracing::warn!("Rejecting blank {:?} search", mode);
        return Ok(SearchOutcome::Failed(SearchFailure::Rejected {
            message: Some(EMPTY_TERM_MESSAGE.to_string()),
        }));
    };

    let client = backend().await?;

    match client.search(&request).await {
        Ok(results) => {
            tracing::info!("Search successful: found {} products", results.products.len());
            Ok(SearchOutcome::Found(results))
        }
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            Ok(SearchOutcome::Failed(e.into_failure()))
        }
    }
}

/// Call `search_listings` and fold a failed call into `SearchFailure::Unreachable`.
pub async fn fetch_outcome(mode: SearchMode, term: String) -> SearchOutcome {
    match search_listings(mode, term).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Search server function failed: {}", e);
            SearchOutcome::Failed(SearchFailure::Unreachable)
        }
    }
}
