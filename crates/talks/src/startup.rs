use crate::{
    all_talks,
    clock::{Clock, SystemClock},
    db::{self, Database, TalkRepository},
    home_handler,
    presentation::{DocumentRoot, PresentationFiles},
    routes, talk_detail_handler, talk_list_handler, talk_months_handler,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use time::UtcOffset;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub talks: Arc<dyn TalkRepository>,
    pub presentations: Arc<dyn PresentationFiles>,
    pub clock: Arc<dyn Clock>,
}

#[derive(OpenApi)]
#[openapi(
    paths(routes::api::talks::all_talks),
    components(schemas(db::Talk, db::Cue, db::Resource)),
    tags(
        (name = "php dorset talks api", description = "read-only listing of every talk given at PHP Dorset")
    )
)]
struct ApiDoc;

pub async fn build_app_state(
    database_dir: String,
    document_root: String,
    utc_offset: UtcOffset,
) -> Result<AppState, anyhow::Error> {
    let db = Database::new(&database_dir)
        .await
        .map_err(|e| anyhow!("error setting up SQLite database: {}", e))?;

    Ok(AppState {
        talks: Arc::new(db),
        presentations: Arc::new(DocumentRoot::new(document_root)),
        clock: Arc::new(SystemClock::new(utc_offset)),
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let serve_document_root = ServeDir::new(app_state.presentations.document_root());
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(home_handler))
        .route("/talks", get(talk_list_handler))
        .route("/talks/{year}/{month}", get(talk_months_handler))
        .route("/talks/{year}/{month}/{key}", get(talk_detail_handler))
        // API routes
        .route("/api/talks", get(all_talks))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        // Slides, stylesheets and images live in the document root
        .fallback_service(serve_document_root)
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
