// web_app/model/mod.rs - Shared data models for client and server
//
// These types describe the JSON contract with the scraper backend and the
// values passed between the search page and its server function.

use serde::{Deserialize, Serialize};

pub mod notice;
pub mod sellers;
pub mod session;

pub use notice::{Notice, NoticeKind, ToastId, Toasts, TOAST_LIFETIME};
pub use sellers::{KnownSeller, SellerDirectory};
pub use session::{SearchSession, Ticket};

/// Value the scraper puts in `Image URL` when a listing has no picture.
pub const NO_IMAGE_SENTINEL: &str = "No image URL";

/// Shown while a submission is in flight.
pub const PENDING_MESSAGE: &str = "Scraping products...";

/// Shown when the backend rejects a request without saying why.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to scrape products";

/// Shown when the backend cannot be reached or answers with garbage.
pub const UNREACHABLE_MESSAGE: &str =
    "Failed to connect to scraper. Make sure the scraper backend is running.";

/// Shown when a search is submitted with nothing to search for.
pub const EMPTY_TERM_MESSAGE: &str = "Please enter a search term or select a seller.";

/// The three mutually exclusive ways to parameterize a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    #[default]
    Product,    // Free-text product name
    Seller,     // Seller identifier, picked from the list or typed
    SellerName, // Free-text seller name
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Product, SearchMode::Seller, SearchMode::SellerName];

    /// Label of the submit button for this mode
    pub fn action_label(&self) -> &'static str {
        match self {
            SearchMode::Product => "Search Products",
            SearchMode::Seller => "Filter by Seller",
            SearchMode::SellerName => "Search by Seller",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Product => write!(f, "Product Search"),
            SearchMode::Seller => write!(f, "Seller Filter"),
            SearchMode::SellerName => write!(f, "Seller Search"),
        }
    }
}

/// Whether a term is worth sending: anything but blank.
pub fn is_submittable(term: &str) -> bool {
    !term.trim().is_empty()
}

/// Request body for `POST /search`
///
/// Serializes to an object with exactly one key, e.g. `{"seller": "reference"}`.
/// The term is sent verbatim; trimming only decides whether it is sendable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchRequest {
    #[serde(rename = "search")]
    Product(String),
    #[serde(rename = "seller")]
    Seller(String),
    #[serde(rename = "sellerSearch")]
    SellerName(String),
}

impl SearchRequest {
    /// Build the payload for `mode`, or `None` if the term is blank.
    pub fn new(mode: SearchMode, term: impl Into<String>) -> Option<Self> {
        let term = term.into();
        if !is_submittable(&term) {
            return None;
        }

        Some(match mode {
            SearchMode::Product => SearchRequest::Product(term),
            SearchMode::Seller => SearchRequest::Seller(term),
            SearchMode::SellerName => SearchRequest::SellerName(term),
        })
    }

    pub fn mode(&self) -> SearchMode {
        match self {
            SearchRequest::Product(_) => SearchMode::Product,
            SearchRequest::Seller(_) => SearchMode::Seller,
            SearchRequest::SellerName(_) => SearchMode::SellerName,
        }
    }

    pub fn term(&self) -> &str {
        match self {
            SearchRequest::Product(term)
            | SearchRequest::Seller(term)
            | SearchRequest::SellerName(term) => term,
        }
    }
}

/// A single listing as returned by the scraper
///
/// Every field is an opaque display string; keys match the scraper's JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product Name", default)]
    pub name: String,
    #[serde(rename = "Price", default)]
    pub price: String,
    #[serde(rename = "Link", default)]
    pub link: String,
    #[serde(rename = "Seller", default)]
    pub seller: String,
    #[serde(rename = "Image URL", default)]
    pub image_url: String,
}

impl Product {
    /// Image to render, if the listing has one
    pub fn image_src(&self) -> Option<&str> {
        let url = self.image_url.trim();
        (!url.is_empty() && url != NO_IMAGE_SENTINEL).then_some(url)
    }
}

/// Raw response body from `POST /search`
///
/// Only presence checks are applied; unknown fields are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<Product>>,
    #[serde(default)]
    pub search_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Listings from one successful search
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub products: Vec<Product>,
    pub search_url: Option<String>,
}

impl From<SearchResponse> for SearchResults {
    fn from(response: SearchResponse) -> Self {
        SearchResults {
            products: response.data.unwrap_or_default(),
            search_url: response.search_url.filter(|url| !url.is_empty()),
        }
    }
}

/// Why a submission produced no results
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchFailure {
    /// Backend answered with a non-success status
    Rejected { message: Option<String> },
    /// Backend unreachable or response unreadable
    Unreachable,
}

impl SearchFailure {
    /// Text for the error notification
    pub fn message(&self) -> String {
        match self {
            SearchFailure::Rejected { message: Some(message) } if !message.is_empty() => message.clone(),
            SearchFailure::Rejected { .. } => REJECTED_FALLBACK_MESSAGE.to_string(),
            SearchFailure::Unreachable => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

/// What the search server function hands back to the page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found(SearchResults),
    Failed(SearchFailure),
}
