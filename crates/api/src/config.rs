/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Catalog document location: a filesystem path or an `http(s)://` URL.
    pub catalog_source: String,
    /// Directory served under `/static` (stylesheet, category tiles).
    pub static_dir: String,
    /// Delay of the simulated contact submission in milliseconds.
    pub contact_submit_delay_ms: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `CATALOG_SOURCE`          | `data/projects.json`       |
    /// | `STATIC_DIR`              | `public`                   |
    /// | `CONTACT_SUBMIT_DELAY_MS` | `1000`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let catalog_source =
            std::env::var("CATALOG_SOURCE").unwrap_or_else(|_| "data/projects.json".into());

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into());

        let contact_submit_delay_ms: u64 = std::env::var("CONTACT_SUBMIT_DELAY_MS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("CONTACT_SUBMIT_DELAY_MS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            catalog_source,
            static_dir,
            contact_submit_delay_ms,
        }
    }
}
