#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use rental_server::{Config, ServerState, api};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub state: ServerState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::with_overrides(std::env::temp_dir().to_string_lossy(), 0);
        let state = ServerState::in_memory(config).await.unwrap();
        let router = api::build_app(&state).with_state(state.clone());
        Self { state, router }
    }

    /// Send a request and return (status, JSON body or Null)
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        user: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(self.state.config.actor_header.as_str(), user);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let resp = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body), Some("tester")).await
    }

    /// Send a raw (possibly malformed) JSON body
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> StatusCode {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        self.router.clone().oneshot(req).await.unwrap().status()
    }

    pub async fn seed_product(&self, id: i64, name: &str) {
        sqlx::query("INSERT INTO product (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(self.state.pool())
            .await
            .unwrap();
    }

    pub async fn seed_device(&self, id: &str, product_id: i64) {
        sqlx::query("INSERT INTO device (id, product_id) VALUES (?, ?)")
            .bind(id)
            .bind(product_id)
            .execute(self.state.pool())
            .await
            .unwrap();
    }

    pub async fn seed_case(&self, id: i64, name: &str) {
        sqlx::query("INSERT INTO device_case (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(self.state.pool())
            .await
            .unwrap();
    }

    /// Create a job over HTTP and return its id
    pub async fn create_job(&self, description: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/jobs",
                serde_json::json!({
                    "customer_id": 1,
                    "status_id": 1,
                    "job_category_id": 1,
                    "description": description,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap()
    }
}
