use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            run_migrations: parse_flag(
                "RUN_MIGRATIONS",
                std::env::var("RUN_MIGRATIONS").ok().as_deref(),
                true,
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_flag(key: &str, raw: Option<&str>, default: bool) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_when_unset() {
        assert!(parse_flag("RUN_MIGRATIONS", None, true).unwrap());
        assert!(!parse_flag("RUN_MIGRATIONS", None, false).unwrap());
    }

    #[test]
    fn test_flag_accepts_common_spellings() {
        assert!(parse_flag("X", Some("TRUE"), false).unwrap());
        assert!(parse_flag("X", Some(" on "), false).unwrap());
        assert!(!parse_flag("X", Some("0"), true).unwrap());
        assert!(!parse_flag("X", Some("No"), true).unwrap());
    }

    #[test]
    fn test_flag_rejects_garbage() {
        let err = parse_flag("RUN_MIGRATIONS", Some("maybe"), true).unwrap_err();
        assert!(err.to_string().contains("RUN_MIGRATIONS"));
    }
}
