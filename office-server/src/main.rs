use office_server::{print_banner, Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv + logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    let log_dir = config.log_dir();
    office_server::init_logger_with_file(Some(&config.log_level), None, log_dir.as_deref());

    print_banner();
    tracing::info!("Office Server starting...");

    // 2. Initialize server state (database pool + migrations)
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    server.run().await
}
