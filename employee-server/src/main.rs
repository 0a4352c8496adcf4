use std::sync::Arc;

use employee_server::{Server, ServerState, db, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment();

    tracing::info!(
        environment = %config.environment,
        "Employee server starting..."
    );

    let store = match db::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, url = %config.database_url, "Failed to connect to database");
            return Err(e.into());
        }
    };
    tracing::info!("Connected to database");

    let state = ServerState::new(config.clone(), Arc::new(store));

    if let Err(e) = Server::with_state(config, state).run().await {
        tracing::error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
