use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ArchiveStore, ClassifierClient};
use crate::presentation::handlers::{
    answer_question_handler, generate_path_handler, health_handler, start_questions_handler,
    upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C, A>(state: AppState<C, A>) -> Router
where
    C: ClassifierClient + 'static,
    A: ArchiveStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/intake/questions/start",
            post(start_questions_handler::<C, A>),
        )
        .route(
            "/api/intake/questions/answer",
            post(answer_question_handler::<C, A>),
        )
        .route(
            "/api/intake/generate-path",
            post(generate_path_handler::<C, A>),
        )
        .route(
            "/api/intake/upload/{session_id}",
            post(upload_handler::<C, A>),
        )
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
