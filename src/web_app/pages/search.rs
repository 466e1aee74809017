// web_app/pages/search.rs - Search page component
//
// The scraper page: three search modes behind tabs, one in-flight request at
// a time (as far as the buttons are concerned), results replaced wholesale.

use leptos::prelude::*;
use crate::web_app::model::*;
use crate::web_app::components::*;
use crate::web_app::server_fns::fetch_outcome;

/// Main search page component
///
/// Owns all search state. Nothing here outlives the page.
#[component]
pub fn SearchPage() -> impl IntoView {
    // One input per mode, kept across tab switches
    let mode = RwSignal::new(SearchMode::default());
    let search_term = RwSignal::new(String::new());
    let seller_filter = RwSignal::new(String::new());
    let seller_search = RwSignal::new(String::new());

    let session = RwSignal::new(SearchSession::default());
    let toaster = Toaster::new();
    let sellers = SellerDirectory::builtin();

    // Derived signals for rendering
    let products = Signal::derive(move || session.with(|s| s.products().to_vec()));
    let search_url = Signal::derive(move || session.with(|s| s.search_url().map(str::to_string)));

    let on_submit = Callback::new(move |request: SearchRequest| {
        submit_search(session, toaster, request);
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <div class="container mx-auto p-6 max-w-6xl">
                <div class="mb-8">
                    <a href="/" class="text-sm text-blue-600 hover:underline">"← Luxury Link Group"</a>
                    <h1 class="text-3xl font-bold mt-2 mb-2">"Rakuten Product Scraper"</h1>
                    <p class="text-gray-500">
                        "Search for products or sellers on Rakuten through FromJapan"
                    </p>
                </div>

                <section class="mb-8">
                    <SearchModeTabs mode=mode />

                    {move || match mode.get() {
                        SearchMode::Product => view! {
                            <SearchForm
                                mode=SearchMode::Product
                                title="Search Products"
                                description="Enter a product name to search for on Rakuten"
                                label="Product Name"
                                input_id="product-search"
                                placeholder="e.g., iPhone, Nintendo Switch, etc."
                                term=search_term
                                session=session
                                on_submit=on_submit
                            />
                        }.into_any(),
                        SearchMode::Seller => {
                            let sellers = sellers.clone();
                            view! {
                                <SearchForm
                                    mode=SearchMode::Seller
                                    title="Filter by Seller"
                                    description="Select a seller from the list or enter a custom ID (minimum price: ¥50,000)"
                                    label="Or Enter Custom Seller ID"
                                    input_id="seller-filter"
                                    placeholder="e.g., custom-seller-id"
                                    term=seller_filter
                                    session=session
                                    on_submit=on_submit
                                >
                                    <SellerSelect value=seller_filter directory=sellers />
                                </SearchForm>
                            }.into_any()
                        }
                        SearchMode::SellerName => view! {
                            <SearchForm
                                mode=SearchMode::SellerName
                                title="Search by Seller Name"
                                description="Enter a seller name to search for their products (minimum price: ¥50,000)"
                                label="Seller Name"
                                input_id="seller-search"
                                placeholder="e.g., Electronics Store"
                                term=seller_search
                                session=session
                                on_submit=on_submit
                            />
                        }.into_any(),
                    }}
                </section>

                <SearchUrlBanner search_url=search_url />
                <ResultsSection products=products />
            </div>

            <ToastStack toaster=toaster />
        </div>
    }
}

/// Run one submission: mark loading, call the server, apply the outcome.
///
/// A completion that has been overtaken by a newer submission only removes
/// its own pending toast.
fn submit_search(session: RwSignal<SearchSession>, toaster: Toaster, request: SearchRequest) {
    let Some(ticket) = session.try_update(|s| s.begin()) else {
        return;
    };
    let pending = toaster.show(Notice::pending(PENDING_MESSAGE));

    leptos::task::spawn_local(async move {
        let outcome = fetch_outcome(request.mode(), request.term().to_string()).await;

        if let Some(id) = pending {
            toaster.dismiss(id);
        }

        if let Some(notice) = session.try_update(|s| s.complete(ticket, outcome)).flatten() {
            toaster.show(notice);
        }
    });
}
