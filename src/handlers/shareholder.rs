use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::middleware::auth::{CurrentSession, RequireShareholder};
use crate::middleware::session::ShareholderIdentity;
use crate::router::{Page, QnaState};
use crate::views::{self, Notice};
use crate::QnaError;

const LOGIN_FAILED: &str = "Login details are incorrect.";
const QUESTION_SUBMITTED: &str = "Your question has been submitted.";

#[derive(Debug, Deserialize)]
pub struct ShareholderLoginForm {
    #[serde(default)]
    pub shareholder_number: String,
    #[serde(default)]
    pub postal_code: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question: String,
}

/// POST /shareholder/login
pub async fn login(
    State(state): State<QnaState>,
    CurrentSession { mut session, jar }: CurrentSession,
    Form(form): Form<ShareholderLoginForm>,
) -> Result<Response, QnaError> {
    let found = state
        .storage
        .find_shareholder_login(&form.shareholder_number, &form.postal_code)
        .await?;

    let Some(found) = found else {
        warn!("shareholder login rejected");
        let html = views::shareholder::login_page(Some(Notice::error(LOGIN_FAILED)));
        return Ok((StatusCode::UNAUTHORIZED, jar, Html(html)).into_response());
    };

    info!(shareholder_number = %form.shareholder_number, "shareholder logged in");
    session.shareholder = Some(ShareholderIdentity::new(form.shareholder_number, found));
    let jar = state.sessions.store(jar, session)?;
    Ok((jar, Redirect::to(Page::Shareholder.href())).into_response())
}

/// POST /shareholder/question -> stamped with the session's shareholder number.
pub async fn submit_question(
    State(state): State<QnaState>,
    RequireShareholder { identity, jar, .. }: RequireShareholder,
    Form(form): Form<QuestionForm>,
) -> Result<Response, QnaError> {
    let id = state
        .storage
        .save_question(&identity.shareholder_number, &form.question)
        .await?;
    info!(
        question_id = id,
        shareholder_number = %identity.shareholder_number,
        "question submitted"
    );

    let html =
        views::shareholder::question_page(&identity, Some(Notice::success(QUESTION_SUBMITTED)));
    Ok((jar, Html(html)).into_response())
}

/// POST /shareholder/logout
pub async fn logout(
    State(state): State<QnaState>,
    CurrentSession { mut session, jar }: CurrentSession,
) -> Result<Response, QnaError> {
    session.shareholder = None;
    let jar = state.sessions.store(jar, session)?;
    Ok((jar, Redirect::to(Page::Shareholder.href())).into_response())
}
