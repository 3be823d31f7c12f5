use common::config::components::connections::{AdapterConnectionDetails, DatabaseAdapterType};
use pipeline::load::load;
use pipeline::records::CombinedRecord;
use shared_clients::create_db_adapter;
use std::env;

fn row(user_id: i64, post_id: i64, title: &str) -> CombinedRecord {
    CombinedRecord {
        user_id,
        post_id,
        title: title.to_string(),
        body: "body".to_string(),
        name: Some("Ann".to_string()),
        username: Some("ann1".to_string()),
        email: Some("a@x.com".to_string()),
    }
}

/// Integration test that exercises the replace semantics against a live
/// PostgreSQL instance. The connection can be configured with `PG_HOST`,
/// `PG_PORT`, `PG_USER`, `PG_PASS` and `PG_DB`; defaults match a local
/// development database.
#[tokio::test]
#[ignore]
async fn test_replace_leaves_only_the_latest_dataset() -> Result<(), Box<dyn std::error::Error>> {
    let host = env::var("PG_HOST").unwrap_or_else(|_| "localhost".into());
    let port = env::var("PG_PORT").unwrap_or_else(|_| "5432".into());
    let user = env::var("PG_USER").unwrap_or_else(|_| "postgres".into());
    let pass = env::var("PG_PASS").unwrap_or_else(|_| "password".into());
    let db = env::var("PG_DB").unwrap_or_else(|_| "etl_dev".into());

    let conn = AdapterConnectionDetails::new(
        &host,
        &user,
        &db,
        &pass,
        &port,
        DatabaseAdapterType::Postgres,
    );
    let mut adapter = create_db_adapter(conn).await?;

    let first = vec![row(1, 100, "first"), row(1, 101, "first")];
    load(adapter.as_mut(), &first, "user_posts_it").await?;

    let second = vec![row(2, 200, "second")];
    load(adapter.as_mut(), &second, "user_posts_it").await?;

    let rows = adapter
        .query("SELECT post_id, title FROM \"user_posts_it\" ORDER BY post_id")
        .await?;
    assert_eq!(rows.len(), 1);
    let post_id: i64 = rows[0].get(0);
    let title: String = rows[0].get(1);
    assert_eq!(post_id, 200);
    assert_eq!(title, "second");

    adapter.execute("DROP TABLE IF EXISTS \"user_posts_it\";").await?;
    Ok(())
}
