use crate::config::components::connections::{
    AdapterConnectionDetails, ConnectionsConfig, DatabaseAdapterType,
};
use crate::config::components::global::EtlConfig;
use crate::config::components::project::ProjectConfig;
use crate::config::error::ConfigError;
use serde::de::Error;
use serde::Deserialize;
use serde_yaml::{self, Error as YamlError};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the project file (`etl-project.yml`) and the connections file it
/// references. `project_config_path` is the directory holding the project
/// file; when `None` the current directory is used.
pub fn read_config(project_config_path: Option<PathBuf>) -> Result<EtlConfig, ConfigError> {
    let proj_config_file_path = if let Some(config_path) = project_config_path {
        config_path.join("etl-project.yml")
    } else {
        "etl-project.yml".into()
    };

    let project_file = fs::File::open(&proj_config_file_path)?;
    let project: ProjectConfig = serde_yaml::from_reader(project_file)?;

    let config_root = proj_config_file_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let connections_path = resolve_path(&config_root, &project.connection_profile.path);
    if !connections_path.exists() {
        return Err(ConfigError::missing_connection(&connections_path));
    }
    let conn_file = fs::File::open(&connections_path)?;
    let raw_connections: HashMap<String, RawConnectionDetails> =
        serde_yaml::from_reader(conn_file)?;

    let mut connections = ConnectionsConfig::new();
    for (profile, raw) in raw_connections.into_iter() {
        let details = raw
            .into_adapter_details()
            .map_err(|err| ConfigError::parse_error(format!("profile {}: {}", profile, err)))?;
        connections.insert(profile, details);
    }

    Ok(EtlConfig::new(project, connections))
}

fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[derive(Debug, Deserialize)]
struct RawConnectionDetails {
    #[serde(default)]
    adapter: Option<DatabaseAdapterType>,
    #[serde(default)]
    adapter_type: Option<DatabaseAdapterType>,
    host: String,
    user: String,
    database: String,
    password: String,
    #[serde(deserialize_with = "deserialize_port_to_string")]
    port: String,
}

impl RawConnectionDetails {
    fn into_adapter_details(self) -> Result<AdapterConnectionDetails, YamlError> {
        let adapter_type = self
            .adapter_type
            .or(self.adapter)
            .ok_or_else(|| YamlError::custom("missing `adapter` or `adapter_type`"))?;

        Ok(AdapterConnectionDetails::new(
            self.host.as_str(),
            self.user.as_str(),
            self.database.as_str(),
            self.password.as_str(),
            self.port.as_str(),
            adapter_type,
        ))
    }
}

fn deserialize_port_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PortVisitor;

    impl<'de> serde::de::Visitor<'de> for PortVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer port value")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if value < 0 {
                return Err(E::custom("port cannot be negative"));
            }
            Ok(value.to_string())
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_owned())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }
    }

    deserializer.deserialize_any(PortVisitor)
}
