use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::config::{MAX_TTL_MINUTES, SessionConfig};
use crate::db::models::ShareholderLogin;
use crate::error::QnaError;

pub const SESSION_COOKIE: &str = "qna_session";

/// Minimum master secret length accepted for key derivation.
const MIN_SECRET_LEN: usize = 32;

/// Identity stamped into the session on a successful shareholder login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareholderIdentity {
    pub shareholder_number: String,
    pub name: String,
    pub shares: i64,
}

impl ShareholderIdentity {
    pub fn new(shareholder_number: impl Into<String>, login: ShareholderLogin) -> Self {
        Self {
            shareholder_number: shareholder_number.into(),
            name: login.name,
            shares: login.shares,
        }
    }
}

/// Per-browser state, serialized into an encrypted cookie.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub shareholder: Option<ShareholderIdentity>,
    /// Unix seconds of the last login that wrote this session.
    #[serde(default)]
    pub issued_at: i64,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        !self.admin && self.shareholder.is_none()
    }
}

/// Reads and writes [`Session`] values through a [`PrivateCookieJar`].
#[derive(Debug, Clone)]
pub struct SessionManager {
    ttl: Duration,
    secure: bool,
}

impl SessionManager {
    pub fn new(ttl: Duration, secure: bool) -> Self {
        Self { ttl, secure }
    }

    pub fn from_config(cfg: &SessionConfig) -> Self {
        let minutes = cfg.ttl_minutes.clamp(0, MAX_TTL_MINUTES);
        Self::new(Duration::minutes(minutes), cfg.secure_cookie)
    }

    pub fn is_expired_at(&self, session: &Session, now: i64) -> bool {
        now - session.issued_at >= self.ttl.whole_seconds()
    }

    /// Current session, or an empty one. A stale or unreadable cookie is dropped from the jar.
    pub fn load(&self, jar: PrivateCookieJar) -> (Session, PrivateCookieJar) {
        let Some(raw) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) else {
            return (Session::default(), jar);
        };

        let session = match serde_json::from_str::<Session>(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "discarding unreadable session cookie");
                return (Session::default(), self.clear(jar));
            }
        };

        if self.is_expired_at(&session, now_unix()) {
            debug!(issued_at = session.issued_at, "session expired");
            return (Session::default(), self.clear(jar));
        }
        (session, jar)
    }

    /// Persist `session`, restarting its lifetime. An empty session removes the cookie.
    pub fn store(
        &self,
        jar: PrivateCookieJar,
        mut session: Session,
    ) -> Result<PrivateCookieJar, QnaError> {
        if session.is_empty() {
            return Ok(self.clear(jar));
        }
        session.issued_at = now_unix();
        let value = serde_json::to_string(&session)?;
        Ok(jar.add(self.build_cookie(value)))
    }

    pub fn clear(&self, jar: PrivateCookieJar) -> PrivateCookieJar {
        jar.remove(
            Cookie::build(Cookie::new(SESSION_COOKIE, ""))
                .path("/")
                .build(),
        )
    }

    fn build_cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build(Cookie::new(SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(self.ttl)
            .build()
    }
}

/// Cookie encryption key. Derived from the configured secret so sessions survive restarts,
/// otherwise random per process.
pub fn session_key(secret: Option<&str>) -> Key {
    match secret {
        Some(s) if s.len() >= MIN_SECRET_LEN => Key::derive_from(s.as_bytes()),
        Some(_) => {
            warn!(
                min_len = MIN_SECRET_LEN,
                "session secret too short; using a random key"
            );
            Key::generate()
        }
        None => Key::generate(),
    }
}

fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
