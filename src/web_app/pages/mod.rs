// web_app/pages/mod.rs - Page components module
//
// - LandingPage: Static introduction with links into the search page
// - SearchPage: Scraper search interface

pub mod landing;
pub mod search;

// Re-export page components
pub use landing::{LandingPage, SEARCH_SEGMENT};
pub use search::SearchPage;
