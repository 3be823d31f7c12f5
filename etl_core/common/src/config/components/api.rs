use crate::config::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

///  ---------------- API Source Config ----------------
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiSourceConfig {
    pub base_url: String,
    #[serde(default)]
    pub endpoints: HashMap<String, String>,
}

impl ApiSourceConfig {
    /// Resolve a named endpoint to an absolute URL.
    pub fn endpoint_url(&self, name: &str) -> Result<String, ConfigError> {
        let path = self.endpoints.get(name).ok_or_else(|| {
            ConfigError::not_found(format!(
                "API endpoint {} not found in registered config, available endpoints are {}",
                name,
                self.endpoints
                    .keys()
                    .map(|k| k.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ))
        })?;

        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}
