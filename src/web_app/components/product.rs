// web_app/components/product.rs - Product display components
//
// Components for displaying scraped listings:
// - ProductImage: Picture with "No Image" placeholder and load-failure hiding
// - ProductCard: Grid card with name, price, seller and outbound link
// - ResultsSection: Heading plus grid, absent when there are no listings

use leptos::prelude::*;
use crate::web_app::model::Product;
use super::common::PriceBadge;

/// Heading above the results grid
pub fn results_heading(count: usize) -> String {
    format!("Results ({} products found)", count)
}

/// Product picture
///
/// Listings without a picture get a placeholder. A picture that fails to load
/// hides only the <img>, leaving the card intact.
#[component]
pub fn ProductImage(
    /// Image URL, `None` for the placeholder
    src: Option<String>,
    /// Alt text
    alt: String,
) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <div class="aspect-square relative bg-gray-100">
            {match src {
                Some(src) => view! {
                    <img
                        src=src
                        alt=alt
                        loading="lazy"
                        class="w-full h-full object-cover"
                        class:hidden=move || failed.get()
                        on:error=move |_| failed.set(true)
                    />
                }.into_any(),
                None => view! {
                    <div class="w-full h-full flex items-center justify-center text-gray-400">
                        "No Image"
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Product card for the results grid
#[component]
pub fn ProductCard(
    /// The listing to display
    product: Product,
) -> impl IntoView {
    let src = product.image_src().map(str::to_string);

    view! {
        <div class="bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                    border border-gray-100 flex flex-col h-full overflow-hidden">
            <ProductImage src=src alt=product.name.clone() />

            <div class="p-4 flex flex-col flex-1 gap-2">
                // Title
                <h3 class="font-semibold text-sm text-gray-900 line-clamp-2">
                    {product.name.clone()}
                </h3>

                // Price is pre-formatted by the scraper
                <div class="flex items-center justify-between">
                    <PriceBadge>{product.price.clone()}</PriceBadge>
                </div>

                <p class="text-sm text-gray-500">
                    <strong>"Seller:"</strong>" "{product.seller.clone()}
                </p>

                <a
                    href=product.link.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-auto inline-flex items-center justify-center gap-2 w-full px-3 py-1.5 \
                           text-sm font-medium text-gray-700 bg-white border border-gray-300 \
                           rounded-lg hover:bg-gray-50 transition-colors"
                >
                    "↗ View Product"
                </a>
            </div>
        </div>
    }
}

/// Results section
///
/// Renders nothing for an empty list, so "no search yet" and "no results"
/// look the same.
#[component]
pub fn ResultsSection(
    /// Listings from the latest successful search
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    move || {
        let products = products.get();
        (!products.is_empty()).then(|| {
            let heading = results_heading(products.len());
            view! {
                <section class="animate-fade-in">
                    <h2 class="text-2xl font-bold mb-4">{heading}</h2>
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                        {products.into_iter().map(|product| view! {
                            <ProductCard product=product />
                        }).collect_view()}
                    </div>
                </section>
            }
        })
    }
}
