use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub session_dir: PathBuf,
    pub http_timeout_secs: u64,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let api_base_url = env::var("STOCKWATCH_API_URL")
        .unwrap_or_else(|_| "http://localhost:8080/api".to_string());

    let session_dir = env::var("STOCKWATCH_SESSION_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_session_dir());

    let http_timeout_secs = env::var("STOCKWATCH_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(30);

    Settings {
        api_base_url,
        session_dir,
        http_timeout_secs,
    }
}

fn default_session_dir() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".stockwatch"),
        Err(_) => PathBuf::from(".stockwatch"),
    }
}
