use crate::config::components::api::ApiSourceConfig;
use crate::config::components::connections::Connections;
use serde::Deserialize;

fn default_destination_table() -> String {
    "user_posts".to_string()
}

// ---------------- Project Config ----------------
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub version: String,
    #[serde(default = "default_destination_table")]
    pub destination_table: String,
    pub connection_profile: Connections,
    pub api: ApiSourceConfig,
}
