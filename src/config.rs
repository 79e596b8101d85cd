use std::env;
use std::time::Duration;

pub const DEFAULT_GUTENDEX_URL: &str = "https://gutendex.com/books/";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub gutendex_url: String,
    pub http_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
}

impl Config {
    /// Read settings from the environment; `profile` (from `--profile`) wins over `PROFILE`.
    pub fn from_env(profile: Option<String>) -> Self {
        let profile = profile
            .or_else(|| env::var("PROFILE").ok())
            .unwrap_or_else(|| "default".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            if profile == "default" {
                "sqlite://catalog.db?mode=rwc".to_string()
            } else {
                format!("sqlite://catalog_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            gutendex_url: env::var("GUTENDEX_URL")
                .unwrap_or_else(|_| DEFAULT_GUTENDEX_URL.to_string()),
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
            profile,
        }
    }
}
