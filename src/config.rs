use std::path::PathBuf;

use serde::Deserialize;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the myFlix REST API
    #[serde(default = "default_api_url")]
    pub myflix_api_url: String,

    /// Path of the file the session store persists to
    #[serde(default = "default_session_file")]
    pub myflix_session_file: PathBuf,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".myflix-session.json")
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
