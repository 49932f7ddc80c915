use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Password accepted by the administrator page unless overridden.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Longest accepted session lifetime (one year).
pub const MAX_TTL_MINUTES: i64 = 365 * 24 * 60;

/// Service configuration.
///
/// Layering (later wins): built-in defaults, `config.toml`, `QNA_*` env vars.
/// Nested keys use `__`, e.g. `QNA_ADMIN__PASSWORD`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub admin: AdminConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:shareholders.db".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Master secret for the session cookie key. At least 32 bytes.
    /// When absent a random key is generated and sessions do not survive a restart.
    pub secret: Option<String>,
    /// Session lifetime, `1..=MAX_TTL_MINUTES`.
    pub ttl_minutes: i64,
    /// Mark the session cookie `Secure`. Enable only when clients reach the
    /// service over HTTPS (directly or through a TLS-terminating proxy);
    /// browsers drop `Secure` cookies on plain HTTP.
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_minutes: 8 * 60,
            secure_cookie: false,
        }
    }
}

impl Config {
    /// Resolve and validate the layered configuration. Any malformed or
    /// out-of-range value is an error; nothing falls back to defaults.
    pub fn load() -> Result<Self, figment::Error> {
        let cfg: Self = Self::figment().extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), figment::Error> {
        let ttl = self.session.ttl_minutes;
        if !(1..=MAX_TTL_MINUTES).contains(&ttl) {
            return Err(figment::Error::from(format!(
                "session.ttl_minutes must be between 1 and {MAX_TTL_MINUTES}, got {ttl}"
            )));
        }
        Ok(())
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("QNA_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_embed_admin_password() {
        let cfg = Config::default();
        assert_eq!(cfg.admin.password, "admin123");
        assert_eq!(cfg.basic.database_url, "sqlite:shareholders.db");
        assert!(cfg.session.secret.is_none());
        assert_eq!(cfg.session.ttl_minutes, 480);
        assert!(!cfg.session.secure_cookie);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("QNA_ADMIN__PASSWORD", "s3cret");
            jail.set_env("QNA_SESSION__TTL_MINUTES", "5");
            let cfg = Config::load()?;
            assert_eq!(cfg.admin.password, "s3cret");
            assert_eq!(cfg.session.ttl_minutes, 5);
            assert_eq!(cfg.basic.listen_addr, "0.0.0.0:8000");
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_layered_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [basic]
                database_url = "sqlite:meeting.db"

                [admin]
                password = "from-file"
                "#,
            )?;
            jail.set_env("QNA_ADMIN__PASSWORD", "from-env");
            let cfg = Config::load()?;
            assert_eq!(cfg.basic.database_url, "sqlite:meeting.db");
            assert_eq!(cfg.admin.password, "from-env");
            Ok(())
        });
    }

    #[test]
    fn malformed_value_fails_instead_of_resetting_password() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [admin]
                password = "operator-secret"
                "#,
            )?;
            jail.set_env("QNA_SESSION__TTL_MINUTES", "eight-hours");
            let err = Config::load().expect_err("non-numeric ttl must be rejected");
            assert!(err.to_string().contains("ttl_minutes"));
            Ok(())
        });
    }

    #[test]
    fn ttl_outside_range_is_rejected() {
        for bad in ["0", "-5", "9223372036854775807"] {
            figment::Jail::expect_with(|jail| {
                jail.set_env("QNA_SESSION__TTL_MINUTES", bad);
                assert!(Config::load().is_err(), "ttl {bad} accepted");
                Ok(())
            });
        }

        figment::Jail::expect_with(|jail| {
            jail.set_env("QNA_SESSION__TTL_MINUTES", MAX_TTL_MINUTES.to_string());
            jail.set_env("QNA_SESSION__SECURE_COOKIE", "true");
            let cfg = Config::load()?;
            assert_eq!(cfg.session.ttl_minutes, MAX_TTL_MINUTES);
            assert!(cfg.session.secure_cookie);
            Ok(())
        });
    }
}
