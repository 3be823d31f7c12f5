use crate::{AsyncDatabaseAdapter, DatabaseAdapterError};
use async_trait::async_trait;
use log::error;
use tokio_postgres::error::SqlState;
use tokio_postgres::{Client, Error, NoTls, Row};

impl From<Error> for DatabaseAdapterError {
    #[track_caller]
    fn from(err: Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let code = db_err.code();
            if code == &SqlState::CONNECTION_DOES_NOT_EXIST
                || code == &SqlState::CONNECTION_FAILURE
            {
                DatabaseAdapterError::invalid_connection(db_err.to_string())
            } else if code == &SqlState::SYNTAX_ERROR
                || code == &SqlState::UNDEFINED_TABLE
                || code == &SqlState::DATATYPE_MISMATCH
            {
                DatabaseAdapterError::syntax(db_err.to_string())
            } else if code == &SqlState::UNIQUE_VIOLATION
                || code == &SqlState::NOT_NULL_VIOLATION
                || code == &SqlState::CHECK_VIOLATION
            {
                DatabaseAdapterError::constraint(db_err.to_string())
            } else {
                DatabaseAdapterError::unexpected(db_err.to_string())
            }
        } else {
            DatabaseAdapterError::unexpected(err.to_string())
        }
    }
}

pub struct PostgresAdapter {
    pub client: Client,
    _driver: tokio::task::JoinHandle<()>, // keep the task alive
}

impl PostgresAdapter {
    /// Connect, spawning the connection driver in the background.
    pub async fn new(
        host: &str,
        port: u16,
        db: &str,
        user: &str,
        password: &str,
    ) -> Result<Self, DatabaseAdapterError> {
        let conn_str = format!(
            "host={} port={} user={} password={} dbname={}",
            host, port, user, password, db
        );
        let (client, connection) = tokio_postgres::connect(&conn_str, NoTls).await?;
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("postgres connection task exited: {e}");
            }
        });

        Ok(Self {
            client,
            _driver: driver,
        })
    }
}

#[async_trait]
impl AsyncDatabaseAdapter for PostgresAdapter {
    type Row = Row;

    async fn execute(&mut self, sql: &str) -> Result<(), DatabaseAdapterError> {
        self.client.batch_execute(sql).await?; // waits until server confirms
        Ok(())
    }

    async fn query(&self, sql: &str) -> Result<Vec<Self::Row>, DatabaseAdapterError> {
        let response = self.client.query(sql, &[]).await?;
        Ok(response)
    }
}
