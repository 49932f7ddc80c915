use axum::{
    Form,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::middleware::auth::{CurrentSession, RequireAdmin, admin_password_matches};
use crate::router::{Page, QnaState};
use crate::service::question_export::questions_csv;
use crate::service::roster_import::parse_roster;
use crate::views::{self, Notice};
use crate::QnaError;

const INCORRECT_PASSWORD: &str = "Incorrect password.";
const UPLOAD_FIELD: &str = "file";
const EXPORT_DISPOSITION: &str = "attachment; filename=\"questions.csv\"";

#[derive(Debug, Deserialize)]
pub struct AdminLoginForm {
    #[serde(default)]
    pub password: String,
}

/// POST /admin/login
pub async fn login(
    State(state): State<QnaState>,
    CurrentSession { mut session, jar }: CurrentSession,
    Form(form): Form<AdminLoginForm>,
) -> Result<Response, QnaError> {
    if !admin_password_matches(&form.password, &state.admin_password) {
        warn!("administrator login rejected");
        let html = views::admin::login_page(Some(Notice::error(INCORRECT_PASSWORD)));
        return Ok((StatusCode::UNAUTHORIZED, jar, Html(html)).into_response());
    }

    session.admin = true;
    let jar = state.sessions.store(jar, session)?;
    info!("administrator logged in");
    Ok((jar, Redirect::to(Page::Admin.href())).into_response())
}

/// POST /admin/logout
pub async fn logout(
    State(state): State<QnaState>,
    CurrentSession { mut session, jar }: CurrentSession,
) -> Result<Response, QnaError> {
    session.admin = false;
    let jar = state.sessions.store(jar, session)?;
    Ok((jar, Redirect::to(Page::Admin.href())).into_response())
}

/// POST /admin/import -> appends the uploaded roster in one transaction.
pub async fn import_roster(
    State(state): State<QnaState>,
    RequireAdmin { jar, .. }: RequireAdmin,
    mut multipart: Multipart,
) -> Result<Response, QnaError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            upload = Some(field.bytes().await?);
            break;
        }
    }
    // Browsers submit an empty part when no file was chosen.
    let data = upload
        .filter(|bytes| !bytes.is_empty())
        .ok_or(QnaError::MissingUpload)?;

    let rows = parse_roster(&data)?;
    let imported = state.storage.import_shareholders(&rows).await?;
    info!(rows = imported, "roster imported");

    let message = format!("Imported {imported} shareholders.");
    let html = render_console(&state, Some(Notice::success(message))).await?;
    Ok((jar, Html(html)).into_response())
}

/// GET /admin/export -> questions as a CSV download.
pub async fn export_questions(
    State(state): State<QnaState>,
    RequireAdmin { jar, .. }: RequireAdmin,
) -> Result<Response, QnaError> {
    let questions = state.storage.list_questions().await?;
    info!(count = questions.len(), "questions exported");
    let body = questions_csv(&questions);
    Ok((
        jar,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, EXPORT_DISPOSITION),
        ],
        body,
    )
        .into_response())
}

/// Authenticated admin view with fresh data.
pub async fn render_console(
    state: &QnaState,
    notice: Option<Notice>,
) -> Result<String, QnaError> {
    let questions = state.storage.list_questions().await?;
    let shareholder_count = state.storage.count_shareholders().await?;
    Ok(views::admin::console_page(
        questions,
        shareholder_count,
        notice,
    ))
}
