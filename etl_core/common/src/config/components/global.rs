use crate::config::components::connections::{AdapterConnectionDetails, ConnectionsConfig};
use crate::config::components::project::ProjectConfig;
use crate::config::error::ConfigError;

// ---------------- global config ----------------
#[derive(Debug)]
pub struct EtlConfig {
    pub project: ProjectConfig,
    pub connections: ConnectionsConfig,
}

impl EtlConfig {
    pub fn new(project: ProjectConfig, connections: ConnectionsConfig) -> Self {
        Self {
            project,
            connections,
        }
    }

    /// Connection details for the active profile.
    pub fn adapter_connection_details(&self) -> Result<AdapterConnectionDetails, ConfigError> {
        let profile = &self.project.connection_profile.profile;
        self.connections.get(profile).cloned().ok_or_else(|| {
            ConfigError::not_found(format!(
                "Connection profile {} not found in registered config, available profiles are {}",
                profile,
                self.connections
                    .keys()
                    .map(|k| k.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ))
        })
    }
}
