use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::Config;
use crate::db::QnaStorage;
use crate::handlers::{admin, pages, shareholder};
use crate::middleware::session::{SessionManager, session_key};

/// Upload cap for roster files.
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Page selected by the `page` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Admin,
    Shareholder,
}

impl Page {
    /// Unknown values fall back to the landing page.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Page::Admin,
            Some("shareholder") => Page::Shareholder,
            _ => Page::Home,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Page::Home => "/?page=home",
            Page::Admin => "/?page=admin",
            Page::Shareholder => "/?page=shareholder",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Clone)]
pub struct QnaState {
    pub storage: QnaStorage,
    pub sessions: SessionManager,
    pub admin_password: Arc<str>,
    key: Key,
}

impl QnaState {
    pub fn new(
        storage: QnaStorage,
        sessions: SessionManager,
        admin_password: Arc<str>,
        key: Key,
    ) -> Self {
        Self {
            storage,
            sessions,
            admin_password,
            key,
        }
    }

    pub fn from_config(storage: QnaStorage, cfg: &Config) -> Self {
        Self::new(
            storage,
            SessionManager::from_config(&cfg.session),
            Arc::from(cfg.admin.password.as_str()),
            session_key(cfg.session.secret.as_deref()),
        )
    }
}

impl FromRef<QnaState> for Key {
    fn from_ref(state: &QnaState) -> Self {
        state.key.clone()
    }
}

pub fn qna_router(state: QnaState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout))
        .route("/admin/import", post(admin::import_roster))
        .route("/admin/export", get(admin::export_questions))
        .route("/shareholder/login", post(shareholder::login))
        .route("/shareholder/question", post(shareholder::submit_question))
        .route("/shareholder/logout", post(shareholder::logout))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
