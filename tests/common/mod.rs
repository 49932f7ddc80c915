#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use shareholder_qna::db::NewShareholder;
use shareholder_qna::{QnaState, QnaStorage, config::Config};
use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

pub const BOUNDARY: &str = "qna-test-boundary";

pub struct TestApp {
    pub app: Router,
    pub storage: QnaStorage,
    path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Config::default()).await
}

pub async fn spawn_app_with(cfg: Config) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "shareholder-qna-{}-{}-{}.sqlite",
        std::process::id(),
        nanos,
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));

    let database_url = format!("sqlite:{}", path.display());
    let storage = QnaStorage::connect(&database_url)
        .await
        .expect("failed to open test database");

    let state = QnaState::from_config(storage.clone(), &cfg);
    let app = shareholder_qna::qna_router(state);

    TestApp { app, storage, path }
}

pub fn jane_doe() -> NewShareholder {
    NewShareholder {
        shareholder_number: "S001".to_string(),
        name: "Jane Doe".to_string(),
        postal_code: "100-0001".to_string(),
        shares: 500,
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

pub fn post_form(uri: &str, cookie: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).expect("failed to build request")
}

pub fn post_upload(uri: &str, cookie: Option<&str>, file_contents: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"roster.csv\"\r\n\
         Content-Type: text/csv\r\n\
         \r\n\
         {file_contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).expect("failed to build request")
}

/// `qna_session=<value>` from a response's `Set-Cookie`, if it sets a non-empty session.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with("qna_session=") && pair.len() > "qna_session=".len())
        .map(str::to_string)
}

pub fn location(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub async fn body_string(resp: Response<Body>) -> String {
    String::from_utf8(body_bytes(resp).await).expect("response body was not utf-8")
}
