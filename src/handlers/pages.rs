use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};

use crate::handlers::admin::render_console;
use crate::middleware::auth::CurrentSession;
use crate::router::{Page, PageQuery, QnaState};
use crate::{QnaError, views};

/// GET /?page=... -> renders the selected page for the current session.
pub async fn index(
    State(state): State<QnaState>,
    Query(query): Query<PageQuery>,
    CurrentSession { session, jar }: CurrentSession,
) -> Result<Response, QnaError> {
    let html = match Page::parse(query.page.as_deref()) {
        Page::Home => views::home_page(),
        Page::Admin if session.admin => render_console(&state, None).await?,
        Page::Admin => views::admin::login_page(None),
        Page::Shareholder => match &session.shareholder {
            Some(identity) => views::shareholder::question_page(identity, None),
            None => views::shareholder::login_page(None),
        },
    };
    Ok((jar, Html(html)).into_response())
}
