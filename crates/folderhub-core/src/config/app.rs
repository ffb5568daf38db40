//! `[server]` section: listener and CORS.

use serde::{Deserialize, Serialize};

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin policy. A `"*"` entry in origins or headers allows any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            allowed_origins: strings(&["*"]),
            allowed_methods: strings(&["GET", "POST", "DELETE", "OPTIONS"]),
            allowed_headers: strings(&["*"]),
            max_age_seconds: 3600,
        }
    }
}
