// lib.rs - Root module for the luxury_link library
//
// The same crate is compiled twice: natively with `ssr` for the actix server,
// and to WASM with `hydrate` for the browser.

/// The web_app module contains the pages, components and backend plumbing
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: attach to the server-rendered HTML
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
