// web_app/api/mod.rs - Server-side access to the scraper backend
//
// Everything here runs on the server only. The browser never talks to the
// scraper directly; it calls the search server function, which uses these.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;

pub use client::BackendClient;
pub use config::BackendConfig;
pub use error::BackendError;
