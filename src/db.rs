use sea_orm::{Database, DatabaseConnection, DbErr};
use std::env;

/// Open the backing store. `DB=postgres` selects a managed Postgres via
/// `DATABASE_URL`; anything else falls back to a local sqlite file, which is
/// also what development and the test suite use.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let db_type = env::var("DB").unwrap_or_else(|_| "sqlite".to_string());

    let db_url = match db_type.as_str() {
        "postgres" => env::var("DATABASE_URL").expect("DATABASE_URL must be set for Postgres"),
        _ => env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./donatugee.sqlite?mode=rwc".to_string()),
    };

    tracing::info!(
        "connecting to database backend: {}",
        if db_type == "postgres" { "postgres" } else { "sqlite" }
    );

    Database::connect(&db_url).await
}
