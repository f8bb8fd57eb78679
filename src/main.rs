mod config;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let config = config::ServerConfig::from_env(conf.leptos_options.site_addr).expect("invalid server config");

    let app = routes::app(conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.addr, "fleetdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
