// web_app/components/toast.rs - Toast notifications
//
// Toaster is a Copy handle around the page's toast stack. The search page
// creates one and hands it to ToastStack, which renders it.

use leptos::prelude::*;

use crate::web_app::model::{Notice, NoticeKind, ToastId, Toasts};
use super::common::Spinner;

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Toasts>,
}

impl Toaster {
    pub fn new() -> Self {
        Self { toasts: RwSignal::new(Toasts::default()) }
    }

    /// Show a notice. Success and error notices remove themselves later.
    pub fn show(&self, notice: Notice) -> Option<ToastId> {
        let lifetime = notice.lifetime();
        let id = self.toasts.try_update(|toasts| toasts.push(notice))?;

        if let Some(lifetime) = lifetime {
            schedule_dismiss(self.toasts, id, lifetime);
        }

        Some(id)
    }

    pub fn dismiss(&self, id: ToastId) {
        self.toasts.try_update(|toasts| toasts.dismiss(id));
    }

    pub fn entries(&self) -> Vec<(ToastId, Notice)> {
        self.toasts.with(|toasts| toasts.entries().to_vec())
    }
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(toasts: RwSignal<Toasts>, id: ToastId, lifetime: std::time::Duration) {
    set_timeout(
        move || {
            toasts.try_update(|toasts| toasts.dismiss(id));
        },
        lifetime,
    );
}

// timers only exist in the browser
#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(_toasts: RwSignal<Toasts>, _id: ToastId, _lifetime: std::time::Duration) {}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Pending => "bg-white border-gray-200 text-gray-800",
        NoticeKind::Success => "bg-green-50 border-green-200 text-green-800",
        NoticeKind::Error => "bg-red-50 border-red-200 text-red-800",
    }
}

/// Fixed stack of toasts in the bottom-right corner
#[component]
pub fn ToastStack(
    toaster: Toaster,
) -> impl IntoView {
    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80" role="status" aria-live="polite">
            <For
                each=move || toaster.entries()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    view! {
                        <div class=format!(
                            "flex items-start gap-3 px-4 py-3 rounded-xl border shadow-lg animate-fade-in {}",
                            toast_class(notice.kind),
                        )>
                            {match notice.kind {
                                NoticeKind::Pending => view! { <Spinner /> }.into_any(),
                                NoticeKind::Success => view! { <span>"✓"</span> }.into_any(),
                                NoticeKind::Error => view! { <span>"⚠"</span> }.into_any(),
                            }}
                            <p class="flex-1 text-sm font-medium">{notice.message.clone()}</p>
                            <button
                                type="button"
                                class="text-gray-400 hover:text-gray-600"
                                title="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
