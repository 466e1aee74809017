// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types, seller table, page state (no framework deps)
// - server_fns.rs: Server function declarations (both client and server)
// - api/: Scraper backend client and configuration (server only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Landing and search pages (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Backend access (server only)
#[cfg(feature = "backend")]
pub mod api;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
