use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use archivador::application::services::IntakeService;
use archivador::infrastructure::llm::GeminiClassifier;
use archivador::infrastructure::observability::{TracingConfig, init_tracing};
use archivador::infrastructure::persistence::InMemorySessionStore;
use archivador::infrastructure::storage::DropboxArchiveStore;
use archivador::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::from_env(
        settings.logging.level.clone(),
        settings.logging.enable_json,
    ));

    let classifier = Arc::new(GeminiClassifier::new(
        settings.classifier.api_key.clone(),
        settings.classifier.model.clone(),
        settings.classifier.timeout_secs,
    )?);
    let sessions = Arc::new(InMemorySessionStore::new());
    let archive_store = Arc::new(DropboxArchiveStore::new(
        settings.dropbox.access_token.clone(),
    ));

    let intake_service = Arc::new(IntakeService::new(sessions, classifier));

    let state = AppState {
        intake_service,
        archive_store,
        settings: settings.clone(),
    };

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
