use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};
use subtle::ConstantTimeEq;

use crate::middleware::session::{Session, ShareholderIdentity};
use crate::router::{Page, QnaState};

/// Compare a submitted administrator password with the configured one in constant time.
pub fn admin_password_matches(candidate: &str, expected: &str) -> bool {
    bool::from(candidate.as_bytes().ct_eq(expected.as_bytes()))
}

/// Loads the session and the (possibly refreshed) cookie jar, without requiring a login.
pub struct CurrentSession {
    pub session: Session,
    pub jar: PrivateCookieJar,
}

impl FromRequestParts<QnaState> for CurrentSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &QnaState,
    ) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let (session, jar) = state.sessions.load(jar);
        Ok(Self { session, jar })
    }
}

/// Admin-only endpoints. Without an admin session the caller is sent to the password prompt.
pub struct RequireAdmin {
    pub session: Session,
    pub jar: PrivateCookieJar,
}

impl FromRequestParts<QnaState> for RequireAdmin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &QnaState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession { session, jar } =
            CurrentSession::from_request_parts(parts, state).await?;
        if !session.admin {
            return Err((jar, Redirect::to(Page::Admin.href())).into_response());
        }
        Ok(Self { session, jar })
    }
}

/// Endpoints for a logged-in shareholder. Otherwise redirects to the shareholder login form.
pub struct RequireShareholder {
    pub identity: ShareholderIdentity,
    pub session: Session,
    pub jar: PrivateCookieJar,
}

impl FromRequestParts<QnaState> for RequireShareholder {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &QnaState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession { session, jar } =
            CurrentSession::from_request_parts(parts, state).await?;
        let Some(identity) = session.shareholder.clone() else {
            return Err((jar, Redirect::to(Page::Shareholder.href())).into_response());
        };
        Ok(Self {
            identity,
            session,
            jar,
        })
    }
}
