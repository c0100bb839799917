pub mod submissions;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Trivial liveness query. Used by the database probe and the startup
/// self-check; never touches domain data.
pub async fn server_time(pool: &PgPool) -> Result<DateTime<Utc>, sqlx::Error> {
    let row: (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()").fetch_one(pool).await?;
    Ok(row.0)
}
