//! Configuration loading and management
//!
//! Both the server and the client read an optional YAML file and then apply
//! environment-variable overrides, so a bare `cargo run` works against the
//! development defaults with no file present.

use anyhow::Result;
use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8888
}

fn default_api_base_url() -> String {
    "http://localhost:8888/api".to_string()
}

fn default_page_size() -> usize {
    6
}

/// Server-side configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply `DIRECTORY_HOST` / `DIRECTORY_PORT` overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("DIRECTORY_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Ok(port) = std::env::var("DIRECTORY_PORT") {
            if let Ok(port) = port.trim().parse() {
                self.port = port;
            }
        }
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Client-side configuration
///
/// `api_base_url` points at the listing API in networked mode; offline mode
/// never touches the network and ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply the `DIRECTORY_API_URL` override
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DIRECTORY_API_URL") {
            if !url.trim().is_empty() {
                self.api_base_url = url;
            }
        }
        self
    }
}
