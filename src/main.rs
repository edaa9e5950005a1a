mod cms;
mod config;
mod contact;
mod page;
mod routes;
mod sections;
mod services;
mod state;

#[cfg(test)]
mod test_helpers;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in deployment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env().expect("invalid site configuration");
    let port = config.port;
    tracing::info!(
        api_url = %config.api_url,
        revalidate_secs = config.revalidate.as_secs(),
        contact_form_id = config.contact_form_id,
        "site configured"
    );

    let state = state::AppState::from_config(config);

    let loaded = state.pages.warm().await;
    tracing::info!(loaded, "page cache warmed");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "lyceum listening");
    axum::serve(listener, app).await.expect("server failed");
}
