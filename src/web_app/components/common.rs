// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Inline spinning ring, sized by the caller
#[component]
pub fn Spinner(
    #[prop(default = "h-4 w-4 border-2")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block animate-spin rounded-full border-gray-200 border-t-blue-600 {}",
            class,
        )></span>
    }
}

/// Full-width submit button for a form
///
/// `disabled` may be reactive.
#[component]
pub fn SubmitButton(
    /// Button label
    children: Children,
    /// Whether the button is disabled
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || disabled.get()
            class="w-full inline-flex items-center justify-center gap-2 px-4 py-2 bg-blue-600 text-white \
                   rounded-lg hover:bg-blue-700 transition-colors disabled:bg-gray-400 \
                   disabled:cursor-not-allowed font-medium shadow-sm active:transform active:scale-95"
        >
            {children()}
        </button>
    }
}

const PRICE_BADGE_CLASS: &str =
    "px-3 py-1 text-lg font-bold rounded-lg bg-gray-100 text-gray-900 border border-gray-200";

/// Price tag. The scraper sends prices pre-formatted, so this only styles them.
#[component]
pub fn PriceBadge(children: Children) -> impl IntoView {
    view! {
        <span class=PRICE_BADGE_CLASS>
            {children()}
        </span>
    }
}

/// Card container with optional title and description
#[component]
pub fn Card(
    children: Children,
    #[prop(optional)]
    title: Option<&'static str>,
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100">
            {(title.is_some() || description.is_some()).then(|| view! {
                <div class="px-6 pt-6">
                    {title.map(|t| view! { <h3 class="text-xl font-bold text-gray-900">{t}</h3> })}
                    {description.map(|d| view! { <p class="text-sm text-gray-500 mt-1">{d}</p> })}
                </div>
            })}
            <div class="p-6 space-y-4">
                {children()}
            </div>
        </div>
    }
}

/// Text input component
///
/// A styled text input bound to a signal.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Element id, for an associated <label>
    #[prop(optional)]
    id: Option<&'static str>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="text"
            id=id
            placeholder=placeholder
            class="w-full px-4 py-2 border border-gray-300 rounded-lg \
                   focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                   outline-none transition-shadow shadow-sm"
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}
