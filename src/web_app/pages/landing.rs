// web_app/pages/landing.rs - Landing page
//
// Static page: what the tool does and two ways into the search page.

use leptos::prelude::*;

/// Path segment of the search page route
pub const SEARCH_SEGMENT: &str = "scraper";

/// One entry point card on the landing page
#[component]
fn EntryCard(
    title: &'static str,
    icon_class: &'static str,
    description: &'static str,
    bullets: [&'static str; 4],
    cta: &'static str,
    /// Filled (primary) or outlined call to action
    #[prop(default = true)]
    primary: bool,
) -> impl IntoView {
    let cta_class = if primary {
        "block w-full text-center px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
         transition-colors font-medium shadow-sm"
    } else {
        "block w-full text-center px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
         transition-colors border border-gray-300 font-medium shadow-sm"
    };

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 hover:shadow-lg transition-shadow">
            <h2 class="flex items-center gap-2 text-xl font-bold text-gray-900">
                <span class=icon_class>"🔍"</span>
                {title}
            </h2>
            <p class="text-sm text-gray-500 mt-2 mb-4">{description}</p>
            <ul class="space-y-2 text-sm text-gray-600 mb-4">
                {bullets.into_iter().map(|b| view! { <li>"• " {b}</li> }).collect_view()}
            </ul>
            <a href=format!("/{}", SEARCH_SEGMENT) class=cta_class>
                {cta} " ↗"
            </a>
        </div>
    }
}

fn step_classes(color: &str) -> (&'static str, &'static str) {
    match color {
        "green" => ("bg-green-100", "text-green-600"),
        "purple" => ("bg-purple-100", "text-purple-600"),
        _ => ("bg-blue-100", "text-blue-600"),
    }
}

#[component]
fn Step(number: u8, title: &'static str, text: &'static str, color: &'static str) -> impl IntoView {
    let (circle, digit) = step_classes(color);

    view! {
        <div class="text-center">
            <div class=format!("w-12 h-12 {} rounded-full flex items-center justify-center mx-auto mb-2", circle)>
                <span class=format!("{} font-bold", digit)>{number}</span>
            </div>
            <h3 class="font-semibold mb-1">{title}</h3>
            <p class="text-sm text-gray-600">{text}</p>
        </div>
    }
}

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <div class="container mx-auto px-4 py-16">
                <div class="text-center mb-12">
                    <h1 class="text-5xl font-bold mb-4 bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent">
                        "Luxury Link Group"
                    </h1>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                        "Search and find luxury products from various sellers with ease. \
                         Get product details, prices, and seller information automatically."
                    </p>
                </div>

                <div class="max-w-4xl mx-auto grid gap-8 md:grid-cols-2">
                    <EntryCard
                        title="Product Search"
                        icon_class="text-blue-600"
                        description="Search for specific products by name and get detailed information including prices and seller details."
                        bullets=[
                            "Search by product name",
                            "Get product images and prices",
                            "View seller information",
                            "Direct links to products",
                        ]
                        cta="Start Searching"
                    />
                    <EntryCard
                        title="Seller Search"
                        icon_class="text-green-600"
                        description="Filter products by specific sellers or search for products from particular sellers."
                        bullets=[
                            "Filter by seller ID",
                            "Search by seller name",
                            "Minimum price filtering",
                            "Bulk product discovery",
                        ]
                        cta="Explore Sellers"
                        primary=false
                    />
                </div>

                <div class="mt-16 max-w-2xl mx-auto bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
                    <h2 class="text-xl font-bold text-center mb-6">"How it works"</h2>
                    <div class="grid gap-4 md:grid-cols-3">
                        <Step number=1 title="Enter Search" text="Choose your search type and enter keywords" color="blue" />
                        <Step number=2 title="Find Data" text="Our tool collects product information" color="green" />
                        <Step number=3 title="View Results" text="Browse products and access direct links" color="purple" />
                    </div>
                </div>
            </div>
        </div>
    }
}
