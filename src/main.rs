use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use roombook::config::Settings;
use roombook::persist::PersistenceMode;
use roombook::server;
use roombook::store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    let store = Arc::new(Store::new(PersistenceMode::File(
        settings.data_file.clone().into(),
    ))?);
    let app = server::router(store);

    let listener = tokio::net::TcpListener::bind(&settings.listen).await?;
    info!(listen = %settings.listen, data_file = %settings.data_file, "roombook listening");
    axum::serve(listener, app).await?;
    Ok(())
}
