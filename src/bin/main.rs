// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) and server functions
// - A shared HTTP client for the scraper backend
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, LeptosRoutes, handle_server_fns};
    use leptos_meta::MetaTags;
    use luxury_link::web_app::app::App as WebApp;
    use luxury_link::web_app::api::{backend, BackendClient, BackendConfig};
    use tracing_subscriber::EnvFilter;

    // Load environment variables (RUST_LOG and SCRAPER_BACKEND_* may live in .env)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Create the scraper backend client
    let client = BackendClient::new(BackendConfig::from_env())
        .context("failed to build scraper backend client")?;

    tracing::info!("Scraper backend: {}", client.config().endpoint);

    // Initialize global client for server functions
    backend::init_backend(client.clone());

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).context("could not read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Share the backend client across all handlers
            .app_data(web::Data::new(client.clone()))
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
