//! The public site: an axum router over the content API

use crate::api::ContentClient;
use crate::config::{ApiConfig, RelayConfig, SiteConfig};
use crate::notify;
use crate::prelude::{eprintln, *};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use maud::Markup;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

mod forms;
mod pages;
pub mod views;

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "CONSULTANCY_PORT", default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "CONSULTANCY_HOST", default_value = "127.0.0.1")]
    host: String,
}

/// Shared by every handler; built once at start-up
#[derive(Debug)]
pub struct AppState {
    pub client: ContentClient,
    pub site: SiteConfig,
    /// `None` when the relay environment is incomplete
    pub relay: Option<RelayConfig>,
    /// Outbound client for the email and chat relays
    pub http: reqwest::Client,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/contact", post(forms::api_contact))
        .layer(cors);

    Router::new()
        .route("/", get(pages::scholarships))
        .route("/scholarships", get(pages::scholarships))
        .route("/scholarships/{id}", get(pages::scholarship))
        .route("/scholarships/{id}/enquiry", post(forms::scholarship_enquiry))
        .route("/visas", get(pages::visas))
        .route("/visas/{id}", get(pages::visa))
        .route("/visas/{id}/enquiry", post(forms::visa_enquiry))
        .route("/testimonials", get(pages::testimonials))
        .route("/contact", get(forms::contact).post(forms::contact_submit))
        .route("/about", get(pages::about))
        .route("/privacy-policy", get(pages::privacy))
        .route("/terms", get(pages::terms))
        .merge(api)
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .with_state(state)
}

pub(crate) fn respond(status: StatusCode, markup: Markup) -> Response {
    (status, Html(markup.into_string())).into_response()
}

pub async fn run_serve(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = ApiConfig::resolve(global.api_url.clone())?;

    let relay = match RelayConfig::from_env() {
        Ok(relay) => Some(relay),
        Err(e) => {
            log::warn!("Contact relay disabled: {e}");
            None
        }
    };

    let state = Arc::new(AppState {
        client: ContentClient::new(&config)?,
        site: SiteConfig::from_env(),
        relay,
        http: reqwest::Client::new(),
    });

    if let Some(rx) = notify::init() {
        notify::spawn_logger(rx);
    }

    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Content API: {}", config.base_url);
        eprintln!("Listening on http://{}", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("serving on http://{addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::tests::{relay_config, spawn_relays};
    use crate::test_support::{client_for, spawn};
    use axum::extract::{Path, Query, State};
    use axum::Json;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Requests seen by the fake content API
    #[derive(Default)]
    struct Seen {
        listing_queries: Vec<HashMap<String, String>>,
        enquiries: Vec<Value>,
    }

    type Shared = Arc<Mutex<Seen>>;

    fn scholarship(id: &str) -> Value {
        json!({
            "_id": id,
            "title": format!("Scholarship {id}"),
            "institution": "ETH Zurich",
            "hostCountry": "Switzerland",
            "description": "Excellence scholarship",
            "createdAt": "2025-01-15T09:00:00Z"
        })
    }

    async fn fake_content_api() -> (String, Shared) {
        let seen: Shared = Arc::default();
        let app = Router::new()
            .route(
                "/scholarships",
                get(
                    |State(seen): State<Shared>, Query(q): Query<HashMap<String, String>>| async move {
                        seen.lock().unwrap().listing_queries.push(q);
                        Json(json!({"data": [scholarship("s1"), scholarship("s2")], "total": 20}))
                    },
                ),
            )
            .route(
                "/scholarships/{id}",
                get(|Path(id): Path<String>| async move {
                    if id == "missing" {
                        Err((StatusCode::NOT_FOUND, Json(json!({"message": "Scholarship not found"}))))
                    } else {
                        Ok(Json(json!({"data": scholarship(&id)})))
                    }
                }),
            )
            .route(
                "/visas/{id}",
                get(|Path(id): Path<String>| async move {
                    Json(json!({"data": {"_id": id, "title": "Working Holiday", "country": "Australia"}}))
                }),
            )
            .route(
                "/visas",
                get(|| async { Json(json!({"data": [], "total": 0})) }),
            )
            .route(
                "/enquiry",
                post(|State(seen): State<Shared>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().enquiries.push(body);
                    (StatusCode::CREATED, Json(json!({"message": "ok"})))
                }),
            )
            .with_state(seen.clone());

        (spawn(app).await, seen)
    }

    async fn site(api_base: &str, relay: Option<RelayConfig>) -> String {
        let state = Arc::new(AppState {
            client: client_for(api_base),
            site: SiteConfig::default(),
            relay,
            http: reqwest::Client::new(),
        });
        spawn(router(state)).await
    }

    #[tokio::test]
    async fn test_home_lists_scholarships_with_pagination() {
        let (api, seen) = fake_content_api().await;
        let base = site(&api, None).await;

        let response = reqwest::get(format!("{base}/?page=2")).await.unwrap();
        assert_eq!(response.status(), 200);
        let html = response.text().await.unwrap();

        assert!(html.contains("Scholarship s2"));
        assert!(html.contains("ETH Zurich • Switzerland"));
        assert!(html.contains("Posted on Jan 15, 2025"));
        assert!(html.contains(r#"href="/?page=1""#));
        assert!(html.contains(r#"href="/?page=3""#));
        assert_eq!(seen.lock().unwrap().listing_queries[0]["page"], "2");
    }

    #[tokio::test]
    async fn test_junk_page_number_requests_first_page() {
        let (api, seen) = fake_content_api().await;
        let base = site(&api, None).await;

        let response = reqwest::get(format!("{base}/scholarships?page=abc")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(seen.lock().unwrap().listing_queries[0]["page"], "1");
    }

    #[tokio::test]
    async fn test_listing_failure_renders_error_panel() {
        let base = site("http://127.0.0.1:1", None).await;

        let response = reqwest::get(format!("{base}/visas")).await.unwrap();
        assert_eq!(response.status(), 502);
        let html = response.text().await.unwrap();

        assert!(html.contains("Failed to load visas."));
        assert!(html.contains("Main navigation"));
        assert!(!html.contains(r#"class="card-body""#));
    }

    #[tokio::test]
    async fn test_detail_not_found_skips_related_fetches() {
        let (api, seen) = fake_content_api().await;
        let base = site(&api, None).await;

        let response = reqwest::get(format!("{base}/scholarships/missing")).await.unwrap();
        assert_eq!(response.status(), 502);
        let html = response.text().await.unwrap();

        assert!(html.contains("Scholarship not found"));
        assert!(seen.lock().unwrap().listing_queries.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_route_has_no_chrome() {
        let (api, _) = fake_content_api().await;
        let base = site(&api, None).await;

        let response = reqwest::get(format!("{base}/no/such/page")).await.unwrap();
        assert_eq!(response.status(), 404);
        let html = response.text().await.unwrap();

        assert!(html.contains("Oops! Page not found."));
        assert!(!html.contains("Main navigation"));
        assert!(!html.contains("Quick Links"));
    }

    #[tokio::test]
    async fn test_visa_enquiry_success() {
        let (api, seen) = fake_content_api().await;
        let base = site(&api, None).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/visas/v1/enquiry"))
            .form(&[("name", "Noor"), ("email", "noor@example.com"), ("message", "Eligibility?")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let html = response.text().await.unwrap();

        assert!(html.contains("Enquiry sent successfully! 🎉"));
        assert!(html.contains("I%20just%20enquired%20about%3A%20Working%20Holiday."));
        assert!(!html.contains(r#"value="Noor""#));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.enquiries.len(), 1);
        assert_eq!(seen.enquiries[0]["scholarship"], "Visa: Working Holiday");
    }

    #[tokio::test]
    async fn test_enquiry_for_unloadable_scholarship_keeps_values() {
        let (api, seen) = fake_content_api().await;
        let base = site(&api, None).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/scholarships/missing/enquiry"))
            .form(&[("name", "Noor"), ("email", "noor@example.com"), ("message", "Deadline?")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 502);
        let html = response.text().await.unwrap();

        assert!(html.contains("Scholarship not found"));
        assert!(html.contains(r#"value="Noor""#));
        assert!(html.contains(r#"value="noor@example.com""#));
        assert!(html.contains("Deadline?"));
        assert!(html.contains(r#"action="/scholarships/missing/enquiry""#));

        let seen = seen.lock().unwrap();
        assert!(seen.enquiries.is_empty());
        assert!(seen.listing_queries.is_empty());
    }

    #[tokio::test]
    async fn test_contact_without_message_is_rejected_locally() {
        let (api, seen) = fake_content_api().await;
        let base = site(&api, None).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/contact"))
            .form(&[("name", "Noor"), ("email", "noor@example.com"), ("message", "")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 422);
        let html = response.text().await.unwrap();

        assert!(html.contains("Please enter a message."));
        assert!(html.contains(r#"value="Noor""#));
        assert!(seen.lock().unwrap().enquiries.is_empty());
    }

    #[tokio::test]
    async fn test_api_contact_requires_all_fields() {
        let base = site("http://127.0.0.1:1", None).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/api/contact"))
            .json(&json!({"name": "Noor", "email": "noor@example.com"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"success": false, "error": "All fields are required"}));
    }

    #[tokio::test]
    async fn test_api_contact_malformed_body_uses_error_envelope() {
        let base = site("http://127.0.0.1:1", None).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/api/contact"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_api_contact_without_relay_config() {
        let base = site("http://127.0.0.1:1", None).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/api/contact"))
            .json(&json!({"name": "Noor", "email": "noor@example.com", "message": "Hi"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Contact relay is not configured");
    }

    #[tokio::test]
    async fn test_api_contact_relays_email_and_chat() {
        let (relays, received) = spawn_relays(StatusCode::OK).await;
        let base = site("http://127.0.0.1:1", Some(relay_config(&relays))).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/api/contact"))
            .json(&json!({"name": "Noor", "email": "noor@example.com", "message": "Hi"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"success": true}));

        let received = received.lock().unwrap();
        assert_eq!(received.emails.len(), 1);
        assert_eq!(received.chats.len(), 1);
    }

    #[tokio::test]
    async fn test_pages_are_gzipped_on_request() {
        let (api, _) = fake_content_api().await;
        let base = site(&api, None).await;

        let response = reqwest::Client::new()
            .get(format!("{base}/about"))
            .header("accept-encoding", "gzip")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response
                .headers()
                .get("content-encoding")
                .and_then(|v| v.to_str().ok()),
            Some("gzip")
        );
    }
}
