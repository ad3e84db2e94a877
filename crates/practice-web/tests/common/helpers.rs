//! Mock backend and request helpers

use axum::{Router, body::Body, http::Request};
use http::{StatusCode, header};
use practice_core::Config;
use practice_web::{ApiClient, build_app_with_client};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use super::fixtures;

/// A wiremock server standing in for the practice journal backend
pub struct MockBackend {
    pub server: MockServer,
}

impl MockBackend {
    /// Start an empty backend
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Start a backend serving instruments, templates and template 3
    pub async fn with_catalog() -> Self {
        let backend = Self::start().await;
        backend.get("/api/instruments/", fixtures::instruments()).await;
        backend
            .get("/api/templates/", fixtures::template_summaries())
            .await;
        backend
            .get("/api/templates/3", fixtures::violin_template())
            .await;
        backend
    }

    /// Answer GET `route` with a JSON body
    pub async fn get(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer the log listing of template 3
    pub async fn logs(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/api/logs/"))
            .and(query_param("template_id", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer the analytics of template 3
    pub async fn analytics(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/api/analytics/"))
            .and(query_param("template_id", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Fail if `route` is ever requested
    pub async fn forbid(&self, route: &str) {
        Mock::given(path(route))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Bodies of every POST to the log endpoint, parsed as JSON
    pub async fn posted_logs(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == "POST" && r.url.path() == "/api/logs/")
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }

    /// The web app wired to this backend
    pub fn app(&self) -> Router {
        build_app_with_client(Config::default(), ApiClient::new(self.server.uri()))
    }
}

/// Rendered response of a request
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

async fn send(app: Router, request: Request<Body>) -> Page {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    Page {
        status,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// GET a path from the app
pub async fn get(app: Router, uri: &str) -> Page {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// POST an urlencoded form to the app
pub async fn post_form(app: Router, uri: &str, form: &str) -> Page {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}
