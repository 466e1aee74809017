// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up meta tags, routing, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::{path, StaticSegment};

use crate::web_app::pages::{LandingPage, SearchPage, SEARCH_SEGMENT};

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with the landing and search routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        // HTML meta tags
        <Title text="Luxury Link Group" />
        <Meta name="description" content="Search luxury products and sellers on Rakuten through FromJapan" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/luxury_link.css" />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=StaticSegment(SEARCH_SEGMENT) view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to Home"
                </a>
            </div>
        </div>
    }
}
