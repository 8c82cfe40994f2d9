use catalog_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env and logging
    setup_environment()?;

    // 2. Configuration
    let config = Config::from_env();
    tracing::info!(
        "Catalog server starting (env: {}, data: {})",
        config.environment,
        config.data_file_path().display()
    );

    // 3. State and HTTP server
    let state = ServerState::initialize(&config);
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
