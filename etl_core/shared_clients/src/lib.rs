pub mod api;
pub mod postgres;

use crate::postgres::PostgresAdapter;
use async_trait::async_trait;
use common::config::components::connections::{AdapterConnectionDetails, DatabaseAdapterType};
use common::error::diagnostics::DiagnosticMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseAdapterError {
    #[error("invalid connection details: {context}")]
    InvalidConnectionError { context: DiagnosticMessage },
    #[error("SQL syntax error: {context}")]
    SyntaxError { context: DiagnosticMessage },
    #[error("constraint violation: {context}")]
    ConstraintViolation { context: DiagnosticMessage },
    #[error("I/O error: {context}")]
    IoError {
        context: DiagnosticMessage,
        #[source]
        source: std::io::Error,
    },
    #[error("unexpected database error: {context}")]
    UnexpectedError { context: DiagnosticMessage },
}

impl DatabaseAdapterError {
    #[track_caller]
    pub fn invalid_connection(message: impl Into<String>) -> Self {
        Self::InvalidConnectionError {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::SyntaxError {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedError {
            context: DiagnosticMessage::new(message.into()),
        }
    }
}

impl From<std::io::Error> for DatabaseAdapterError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        let message = err.to_string();
        DatabaseAdapterError::IoError {
            context: DiagnosticMessage::new(message),
            source: err,
        }
    }
}

#[async_trait]
pub trait AsyncDatabaseAdapter: Send + Sync {
    type Row: Send + 'static;
    async fn execute(&mut self, sql: &str) -> Result<(), DatabaseAdapterError>;
    async fn query(&self, sql: &str) -> Result<Vec<Self::Row>, DatabaseAdapterError>;
}

pub type AsyncDbAdapter =
    Box<dyn AsyncDatabaseAdapter<Row = tokio_postgres::Row> + Send + Sync + 'static>;

pub async fn create_db_adapter(
    conn_details: AdapterConnectionDetails,
) -> Result<AsyncDbAdapter, DatabaseAdapterError> {
    match conn_details.adapter_type {
        DatabaseAdapterType::Postgres => {
            let port = conn_details.port.parse::<u16>().map_err(|_| {
                DatabaseAdapterError::invalid_connection(format!(
                    "invalid port '{}'",
                    conn_details.port
                ))
            })?;
            Ok(Box::new(
                PostgresAdapter::new(
                    conn_details.host.as_str(),
                    port,
                    conn_details.database.as_str(),
                    conn_details.user.as_str(),
                    conn_details.password.as_str(),
                )
                .await?,
            ))
        }
    }
}
