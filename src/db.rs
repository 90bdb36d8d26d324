//! SQLite connection setup shared by both services.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// Opens `url` (e.g. `sqlite://users.db` or `sqlite::memory:`), creating the file if needed.
///
/// The pool holds a single connection that is never recycled. Only the owning actor uses
/// it, and an in-memory database lives exactly as long as that connection.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    info!(url, "Database ready");
    Ok(pool)
}
