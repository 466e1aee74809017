// web_app/components/search.rs - Search-related UI components
//
// These components handle the search interface including:
// - SearchModeTabs: Tab strip for Product / Seller Filter / Seller Search
// - SearchForm: Card with one input and a submit button for a single mode
// - SellerSelect: Grouped dropdown over the curated seller list
// - SearchUrlBanner: Echo of the URL the scraper actually searched

use leptos::prelude::*;
use crate::web_app::model::{KnownSeller, SearchMode, SearchRequest, SearchSession, SellerDirectory};
use super::common::{Card, Spinner, SubmitButton, TextInput};

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "flex-1 px-4 py-2 rounded-lg text-sm font-semibold bg-white text-gray-900 shadow-sm transition-all"
    } else {
        "flex-1 px-4 py-2 rounded-lg text-sm font-medium text-gray-500 hover:text-gray-900 transition-all"
    }
}

/// Search mode tabs
///
/// Exactly one mode is active; switching keeps what was typed in the others.
#[component]
pub fn SearchModeTabs(
    /// Current search mode
    mode: RwSignal<SearchMode>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-1 bg-gray-100 p-1 rounded-xl mb-4" role="tablist">
            {SearchMode::ALL.into_iter().map(|tab| {
                let is_selected = move || mode.get() == tab;
                view! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected=move || is_selected().to_string()
                        class=move || tab_class(is_selected())
                        on:click=move |_| mode.set(tab)
                    >
                        {tab.to_string()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Form for a single search mode
///
/// The submit button follows `SearchSession::can_submit`: disabled while the
/// term is blank or a search is in flight. Pressing Enter submits too, but
/// never with a blank term.
#[component]
pub fn SearchForm(
    /// Which payload this form produces
    mode: SearchMode,
    /// Card title
    title: &'static str,
    /// Card description
    description: &'static str,
    /// Label for the text input
    label: &'static str,
    /// Id of the text input
    input_id: &'static str,
    /// Placeholder of the text input
    placeholder: &'static str,
    /// The term being edited
    term: RwSignal<String>,
    /// State of the page's searches
    session: RwSignal<SearchSession>,
    /// Called with the request built from the raw term
    on_submit: Callback<SearchRequest>,
    /// Extra controls shown above the text input
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let disabled = Signal::derive(move || !session.with(|s| term.with(|t| s.can_submit(t))));

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(request) = SearchRequest::new(mode, term.get_untracked()) {
            on_submit.run(request);
        }
    };

    view! {
        <form on:submit=submit>
            <Card title=title description=description>
                {children.map(|c| c())}
                <div class="space-y-2">
                    <label for=input_id class="text-sm font-medium text-gray-700">{label}</label>
                    <TextInput value=term id=input_id placeholder=placeholder />
                </div>
                <SubmitButton disabled=disabled>
                    {move || if loading.get() {
                        view! { <Spinner class="h-4 w-4 border-2 border-t-white" /> }.into_any()
                    } else {
                        view! { <span>"🔍"</span> }.into_any()
                    }}
                    {mode.action_label()}
                </SubmitButton>
            </Card>
        </form>
    }
}

fn seller_option_label(seller: &KnownSeller) -> String {
    if seller.starred {
        format!("{} ★", seller.name)
    } else {
        seller.name.clone()
    }
}

fn seller_options(sellers: &[KnownSeller], value: RwSignal<String>) -> impl IntoView {
    sellers.iter().map(|seller| {
        // Initial state only; the <select> value prop tracks changes
        let selected = value.with_untracked(|v| *v == seller.id);
        view! {
            <option value=seller.id.clone() selected=selected>
                {seller_option_label(seller)}
            </option>
        }
    }).collect_view()
}

/// Seller dropdown
///
/// Writes the chosen seller's id into `value`, which is shared with the
/// free-text input of the seller filter form.
#[component]
pub fn SellerSelect(
    /// The currently selected seller id
    value: RwSignal<String>,
    /// Sellers to offer
    directory: SellerDirectory,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg bg-white \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none cursor-pointer shadow-sm";

    let nothing_selected = value.with_untracked(|v| directory.find(v).is_none());

    view! {
        <div class="space-y-2">
            <label for="seller-select" class="text-sm font-medium text-gray-700">"Select Seller"</label>
            <select
                id="seller-select"
                class=class
                prop:value=move || value.get()
                on:change=move |ev| {
                    value.set(event_target_value(&ev));
                }
            >
                <option value="" disabled=true selected=nothing_selected>
                    "Select a seller from the list"
                </option>
                <optgroup label="Starred Sellers">
                    {seller_options(directory.starred(), value)}
                </optgroup>
                <optgroup label="Other Sellers">
                    {seller_options(directory.others(), value)}
                </optgroup>
            </select>
        </div>
    }
}

/// Link to the listing page the scraper searched
///
/// Renders nothing until a search has returned a URL.
#[component]
pub fn SearchUrlBanner(
    /// URL echoed back by the scraper
    search_url: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        search_url.get().map(|url| view! {
            <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 mb-6">
                <p class="text-sm text-gray-500 break-all">
                    <strong>"Search URL:"</strong>" "
                    <a
                        href=url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-600 hover:underline"
                    >
                        {url.clone()}
                    </a>
                </p>
            </div>
        })
    }
}
