#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{
        Method,
        Request,
        StatusCode,
        header,
    },
};
use bloglist_server::{
    AppState,
    app,
    store::MemoryStore,
};
use serde_json::{
    Value,
    json,
};
use tower::ServiceExt;

pub const SECRET: &str = "integration test secret";

pub struct Response {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
}

impl Response {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.starts_with("application/json"))
    }

    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            SECRET,
            chrono::Duration::hours(1),
        );
        Self { router: app(state) }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Response {
            status,
            content_type,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Response {
        self.post(
            "/api/users",
            None,
            json!({ "username": username, "name": "Superuser", "password": password }),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post(
                "/api/login",
                None,
                json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

        response.body["token"]
            .as_str()
            .expect("token in login response")
            .to_owned()
    }

    pub async fn blogs(&self) -> Vec<Value> {
        let response = self.get("/api/blogs").await;
        assert_eq!(response.status, StatusCode::OK);

        response.body.as_array().cloned().unwrap_or_default()
    }

    /// Root user owning the initial blogs, returns its token
    pub async fn seed(&self) -> String {
        let created = self.create_user("root", "sekret").await;
        assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);

        let token = self.login("root", "sekret").await;
        for blog in initial_blogs() {
            let response = self.post("/api/blogs", Some(&token), blog).await;
            assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        }

        token
    }
}

pub fn initial_blogs() -> Vec<Value> {
    vec![
        json!({
            "title": "html is easy",
            "author": "Ibrahim",
            "url": "http://htmliseasy.com",
            "likes": 504
        }),
        json!({
            "title": "javascipt promise heck",
            "author": "arthur magelli",
            "url": "http://javasciptpromiseheck.com",
            "likes": 1073
        }),
        json!({
            "title": "the hardest thing in the world",
            "author": "sadi",
            "url": "http://thehardestthingintheworld.com",
            "likes": 20131
        }),
    ]
}
