use crate::records::CombinedRecord;
use log::{error, info};
use shared_clients::{AsyncDatabaseAdapter, DatabaseAdapterError};

/// Replace the destination table with `rows`.
///
/// The drop, create, and inserts are submitted as one statement batch, which
/// the server runs in a single implicit transaction.
pub async fn load<A>(
    adapter: &mut A,
    rows: &[CombinedRecord],
    table_name: &str,
) -> Result<(), DatabaseAdapterError>
where
    A: AsyncDatabaseAdapter + ?Sized,
{
    let script = render_replace_script(rows, table_name);
    match adapter.execute(&script).await {
        Ok(()) => {
            info!("loaded {} rows into table {}", rows.len(), table_name);
            Ok(())
        }
        Err(err) => {
            error!("loading error for table {}: {}", table_name, err);
            Err(err)
        }
    }
}

fn render_replace_script(rows: &[CombinedRecord], table_name: &str) -> String {
    let table = quote_ident(table_name);
    let mut script = format!(
        "DROP TABLE IF EXISTS {table};\n\
         CREATE TABLE {table} (\n\
         \x20   user_id BIGINT,\n\
         \x20   post_id BIGINT,\n\
         \x20   title TEXT,\n\
         \x20   body TEXT,\n\
         \x20   name TEXT,\n\
         \x20   username TEXT,\n\
         \x20   email TEXT\n\
         );"
    );

    if !rows.is_empty() {
        let values = rows
            .iter()
            .map(render_row)
            .collect::<Vec<String>>()
            .join(",\n");
        script.push_str(&format!(
            "\nINSERT INTO {table} (user_id, post_id, title, body, name, username, email) VALUES\n{values};"
        ));
    }

    script
}

fn render_row(row: &CombinedRecord) -> String {
    format!(
        "({}, {}, {}, {}, {}, {}, {})",
        row.user_id,
        row.post_id,
        quote_literal(&row.title),
        quote_literal(&row.body),
        optional_literal(row.name.as_deref()),
        optional_literal(row.username.as_deref()),
        optional_literal(row.email.as_deref()),
    )
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn optional_literal(text: Option<&str>) -> String {
    match text {
        Some(text) => quote_literal(text),
        None => "NULL".to_string(),
    }
}
