use std::path::PathBuf;

/// Desk configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local registrant store; override
/// via environment variables (or a `.env` file) in deployment.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Registrant store base URL (default: `http://localhost:8000`).
    pub store_base_url: String,
    /// Directory for the file-backed badge channel (default: `./badges`).
    pub badge_dir: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl DeskConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `STORE_BASE_URL`       | `http://localhost:8000` |
    /// | `BADGE_DIR`            | `./badges`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let store_base_url = std::env::var("STORE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into())
            .trim_end_matches('/')
            .to_string();

        let badge_dir = std::env::var("BADGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./badges"));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            store_base_url,
            badge_dir,
            request_timeout_secs,
        }
    }
}
