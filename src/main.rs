use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use lectern::application::ports::DocumentProcessor;
use lectern::application::services::{GenerationService, SlidePipeline};
use lectern::domain::ContentType;
use lectern::infrastructure::generators::{ContentGeneratorFactory, HeuristicContentGenerator};
use lectern::infrastructure::observability::{TracingConfig, init_tracing};
use lectern::infrastructure::quiz::RandomAnswerIndex;
use lectern::infrastructure::text_processing::{CompositeDocumentProcessor, PlainTextProcessor};
use lectern::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let mut settings = Settings::load(environment).context("Failed to load settings")?;
    if settings.generation.api_key.is_none() {
        settings.generation.api_key = std::env::var("OPENAI_API_KEY").ok();
    }

    let tracing_config = TracingConfig::new(
        environment.as_str(),
        settings.logging.level.clone(),
        settings.logging.enable_json,
    );
    init_tracing(&tracing_config);

    let plain_text: Arc<dyn DocumentProcessor> = Arc::new(PlainTextProcessor);
    let document_processor = Arc::new(CompositeDocumentProcessor::new(vec![
        (ContentType::Text, Arc::clone(&plain_text)),
        (ContentType::Markdown, plain_text),
    ]));

    let mock_generator = Arc::new(HeuristicContentGenerator::new(
        SlidePipeline::default(),
        Arc::new(RandomAnswerIndex),
        Duration::from_millis(settings.generation.mock_response_delay_ms),
    ));
    let generators = Arc::new(ContentGeneratorFactory::new(
        mock_generator,
        settings.generation.completion_model.clone(),
        settings.generation.base_url.clone(),
    ));

    let generation_service = Arc::new(GenerationService::new(
        document_processor,
        generators,
        SlidePipeline::default(),
    ));

    tracing::info!(
        mock = settings.generation.options().wants_mock(),
        style = %settings.generation.default_style,
        "Generation service ready"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        generation_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
