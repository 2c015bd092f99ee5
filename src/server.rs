use crate::client::{OllamaClient, TextGenerator};
use crate::config::ServiceConfig;
use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use crate::state::AnalysisState;
use actix_web::{get, post, web, HttpResponse, HttpServer};
use serde::Deserialize;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;

/// Shared application state: one pipeline and one generation client,
/// reused across all in-flight requests.
pub struct AppState {
    pub pipeline: Pipeline,
    pub client: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(pipeline: Pipeline, client: Arc<dyn TextGenerator>) -> Self {
        Self { pipeline, client }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[get("/")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "running"}))
}

#[post("/analyze")]
pub async fn analyze(
    req: web::Json<AnalyzeRequest>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let state = match AnalysisState::new(req.into_inner().text) {
        Ok(state) => state,
        Err(e) => return failure(e),
    };

    let result = app_state
        .pipeline
        .execute_with_progress(app_state.client.as_ref(), state, |progress| {
            log::debug!(
                "stage {}/{}: {}",
                progress.stage_index + 1,
                progress.total_stages,
                progress.stage_name
            );
        })
        .await;

    match result {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => failure(e),
    }
}

// Validation and generation failures share one flat channel.
fn failure(err: PipelineError) -> HttpResponse {
    log::error!("analysis failed: {err}");
    HttpResponse::InternalServerError().json(json!({"detail": err.to_string()}))
}

pub async fn startup(config: ServiceConfig) -> std::io::Result<()> {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .init();

    let app_state = web::Data::new(AppState::new(
        Pipeline::standard(),
        Arc::new(OllamaClient::new(config.ollama.clone())),
    ));

    log::info!(
        "starting text-analyzer at {}:{} (model '{}' at {})",
        config.host,
        config.port,
        config.ollama.model,
        config.ollama.endpoint
    );

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(app_state.clone())
            .service(health)
            .service(analyze)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
