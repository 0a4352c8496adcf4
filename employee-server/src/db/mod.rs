//! Database Module
//!
//! Opens the SurrealDB connection named by the configured connection string

pub mod models;
pub mod repository;

use surrealdb::opt::auth::Root;

use crate::core::Config;
use repository::{RepoError, RepoResult, SurrealStore};

/// Connect, select namespace and database, and verify the store answers.
///
/// Every step runs under the configured connect budget.
pub async fn connect(config: &Config) -> RepoResult<SurrealStore> {
    match tokio::time::timeout(config.connect_timeout(), open(config)).await {
        Ok(result) => result,
        Err(_) => Err(RepoError::Database(format!(
            "timed out connecting to {} after {}ms",
            config.database_url, config.connect_timeout_ms
        ))),
    }
}

async fn open(config: &Config) -> RepoResult<SurrealStore> {
    let db = surrealdb::engine::any::connect(config.database_url.as_str()).await?;

    if let (Some(username), Some(password)) = (&config.db_user, &config.db_pass) {
        db.signin(Root {
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;
    }

    db.use_ns(config.db_namespace.as_str())
        .use_db(config.db_name.as_str())
        .await?;
    db.health().await?;

    tracing::info!(
        namespace = %config.db_namespace,
        database = %config.db_name,
        "Database connection established"
    );

    Ok(SurrealStore::new(db))
}
