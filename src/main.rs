use node_simulator::api;
use node_simulator::store::memory::NodeStore;
use node_simulator::updater::UpdateLoop;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_NODE_COUNT: usize = 5;
const DEFAULT_INTERVAL_SECS: u64 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut port = DEFAULT_PORT;
    let mut node_count = DEFAULT_NODE_COUNT;
    let mut interval_secs = DEFAULT_INTERVAL_SECS;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                port = args[i + 1].parse()?;
                i += 2;
            }
            "--nodes" => {
                node_count = args[i + 1].parse()?;
                i += 2;
            }
            "--interval-secs" => {
                interval_secs = args[i + 1].parse()?;
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: {} [--port <port>] [--nodes <count>] [--interval-secs <secs>]",
                    args[0]
                );
                std::process::exit(1);
            }
        }
    }

    anyhow::ensure!(node_count > 0, "--nodes must be positive");
    anyhow::ensure!(interval_secs > 0, "--interval-secs must be positive");

    // 1. Shared state, initialized exactly once before anything can read it:
    let store = Arc::new(NodeStore::new());
    store.initialize(node_count).await;

    // 2. Background updater:
    let updater = UpdateLoop::new(store.clone(), Duration::from_secs(interval_secs)).spawn();

    // 3. HTTP router:
    let app = api::router(store);

    // 4. Serve until Ctrl+C, then stop the updater as well:
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server running on http://localhost:{}", port);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    updater.shutdown().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C signal handler");
    tracing::info!("Shutdown signal received, terminating...");
}
