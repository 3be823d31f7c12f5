use clap::Args;
use common::config::loader::read_config;
use common::error::EtlError;
use shared_clients::create_db_adapter;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Destination table to replace (overrides the configured name)
    #[arg(long, value_name = "NAME")]
    pub table: Option<String>,
}

pub fn handle_run(args: RunArgs, config_path: Option<PathBuf>) -> Result<(), EtlError> {
    let mut cfg = read_config(config_path).map_err(EtlError::config)?;
    if let Some(table) = args.table {
        cfg.project.destination_table = table;
    }

    let conn = cfg.adapter_connection_details().map_err(EtlError::config)?;
    let runtime = Runtime::new().map_err(EtlError::config)?;
    runtime.block_on(async {
        let mut adapter = create_db_adapter(conn).await.map_err(EtlError::load)?;
        pipeline::run(&cfg, adapter.as_mut()).await
    })
}
