use crate::extract::extract;
use crate::load::load;
use crate::transform::transform;
use common::config::components::global::EtlConfig;
use common::error::EtlError;
use log::{error, info};
use shared_clients::api::ApiClient;
use shared_clients::AsyncDatabaseAdapter;

/// Run the whole pipeline once: fetch users and posts, join them, and
/// replace the destination table. Aborts after the first failing stage; the
/// sink is never touched unless extraction and transformation both succeed.
pub async fn run<A>(config: &EtlConfig, adapter: &mut A) -> Result<(), EtlError>
where
    A: AsyncDatabaseAdapter + ?Sized,
{
    info!("pipeline started");
    let outcome = run_stages(config, adapter).await;
    info!("pipeline finished");
    outcome
}

async fn run_stages<A>(config: &EtlConfig, adapter: &mut A) -> Result<(), EtlError>
where
    A: AsyncDatabaseAdapter + ?Sized,
{
    let users_url = config
        .project
        .api
        .endpoint_url("users")
        .map_err(EtlError::config)?;
    let posts_url = config
        .project
        .api
        .endpoint_url("posts")
        .map_err(EtlError::config)?;

    let client = ApiClient::new();
    let users = extract(&client, &users_url).await;
    let posts = extract(&client, &posts_url).await;

    let (users, posts) = match (users, posts) {
        (Ok(users), Ok(posts)) => (users, posts),
        (Err(err), _) | (_, Err(err)) => {
            error!("extraction failed, aborting");
            return Err(EtlError::extract(err));
        }
    };

    let combined = match transform(&users, &posts) {
        Ok(combined) => combined,
        Err(err) => {
            error!("transformation failed, aborting");
            return Err(EtlError::transform(err));
        }
    };

    load(adapter, &combined, &config.project.destination_table)
        .await
        .map_err(EtlError::load)
}
