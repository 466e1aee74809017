// common/mod.rs - Shared test utilities: an in-process stand-in for the scraper
//
// Each mock answers every POST /search with a fixed status and body and
// records what it was sent, so tests can check both sides of the exchange.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::http::{header, StatusCode};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use luxury_link::web_app::api::{BackendClient, BackendConfig};

/// One request as the mock scraper saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

struct MockState {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    hits: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockScraper {
    pub endpoint: String,
    state: web::Data<MockState>,
    handle: ServerHandle,
}

impl MockScraper {
    /// Mock that answers with a JSON body
    pub async fn json(status: u16, body: serde_json::Value) -> anyhow::Result<Self> {
        Self::start(status, "application/json", body.to_string()).await
    }

    /// Mock that answers with an arbitrary body
    pub async fn raw(status: u16, content_type: &'static str, body: &str) -> anyhow::Result<Self> {
        Self::start(status, content_type, body.to_string()).await
    }

    async fn start(status: u16, content_type: &'static str, body: String) -> anyhow::Result<Self> {
        let state = web::Data::new(MockState {
            status: StatusCode::from_u16(status)?,
            content_type,
            body,
            hits: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        });

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/search", web::post().to(search))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Ok(Self {
            endpoint: format!("http://{}/search", addr),
            state,
            handle,
        })
    }

    /// Client pointed at this mock
    pub fn client(&self) -> BackendClient {
        BackendClient::new(BackendConfig::default().with_endpoint(self.endpoint.clone()))
            .expect("client should build")
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("request log poisoned").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn search(state: web::Data<MockState>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .expect("request log poisoned")
        .push(RecordedRequest {
            content_type,
            body: String::from_utf8_lossy(&body).into_owned(),
        });

    HttpResponse::build(state.status)
        .content_type(state.content_type)
        .body(state.body.clone())
}

/// Endpoint on a port nothing is listening on
pub fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/search", addr)
}

/// A scraper item in the wire format
pub fn item(name: &str, price: &str, seller: &str, image: &str) -> serde_json::Value {
    serde_json::json!({
        "Product Name": name,
        "Price": price,
        "Link": format!("https://example.com/{}", seller),
        "Seller": seller,
        "Image URL": image,
    })
}
