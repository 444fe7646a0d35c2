use device_store_admin::config::PreviewConfig;
use device_store_admin::state::AppState;
use device_store_admin::{http, routes};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = PreviewConfig::from_env().expect("invalid configuration");
    let table = routes::entity_routes(&config.namespace).expect("entity route table");

    if config.preload_routes {
        let modules = table.preload_all();
        tracing::info!(modules, "route modules preloaded");
    }

    let addr = config.listen_addr();
    let state = AppState::new(config, table);
    let app = http::app(state);
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "admin preview listening");
    axum::serve(listener, app).await.expect("server failed");
}
