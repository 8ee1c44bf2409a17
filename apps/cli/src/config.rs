use std::path::PathBuf;
use std::time::Duration;

use folio_client::DEFAULT_API_URL;

pub struct Config {
    pub api_url: String,
    pub download_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let api_url = std::env::var("FOLIO_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let download_dir = std::env::var("FOLIO_DOWNLOAD_DIR")
            .map(PathBuf::from)
            .ok()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let timeout_ms: u64 = std::env::var("FOLIO_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            api_url,
            download_dir,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
