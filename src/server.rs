/*!
 * HTTP server assembly.
 *
 * Builds the provider clients and services once at startup, wires them
 * into an axum router behind a known-origin CORS layer, and serves.
 */

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use log::{info, warn};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::api::handlers;
use crate::app_config::Config;
use crate::providers::TextGenerator;
use crate::providers::chipp::Chipp;
use crate::providers::gemini::Gemini;
use crate::translation::batch::BatchTranslator;
use crate::translation::core::{
    LanguageDetectionService, TextTranslationService, TranslationService, TransliterationService,
};
use crate::translation::retry::RetryPolicy;

/// Immutable service handles shared read-only across all requests.
///
/// Everything here is constructed once at startup; request handlers only
/// ever read through the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion translation service (`/translate`)
    pub translation: Arc<TranslationService>,

    /// Batched subtitle translator (`/translate/subtitle`)
    pub batch_translator: Arc<BatchTranslator>,

    /// Generative text translation service (`/translate/text`)
    pub text_translation: Arc<TextTranslationService>,

    /// Language detection service (`/detect/language`)
    pub language_detection: Arc<LanguageDetectionService>,

    /// Transliteration service (`/transliterate`)
    pub transliteration: Arc<TransliterationService>,
}

impl AppState {
    /// Build the state over explicit transports.
    ///
    /// Tests pass scripted fakes here; production goes through
    /// [`AppState::from_config`].
    pub fn new(
        chat_generator: Arc<dyn TextGenerator>,
        text_generator: Arc<dyn TextGenerator>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            translation: Arc::new(TranslationService::new(chat_generator)),
            batch_translator: Arc::new(BatchTranslator::new(Arc::clone(&text_generator), retry)),
            text_translation: Arc::new(TextTranslationService::new(Arc::clone(&text_generator))),
            language_detection: Arc::new(LanguageDetectionService::new(Arc::clone(
                &text_generator,
            ))),
            transliteration: Arc::new(TransliterationService::new(text_generator)),
        }
    }

    /// Build the state from validated configuration, constructing one
    /// authenticated client per provider.
    pub fn from_config(config: &Config) -> Self {
        let chipp: Arc<dyn TextGenerator> = Arc::new(Chipp::new(
            config.chipp.api_key.clone(),
            config.chipp.base_url.clone(),
            config.chipp.model.clone(),
            config.chipp.timeout_secs,
        ));
        let gemini: Arc<dyn TextGenerator> = Arc::new(Gemini::new(
            config.gemini.api_key.clone(),
            config.gemini.base_url.clone(),
            config.gemini.model.clone(),
            config.gemini.timeout_secs,
        ));

        Self::new(chipp, gemini, RetryPolicy::from_config(&config.retry))
    }
}

/// Assemble the application router with all routes and the CORS layer.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/translate", post(handlers::translate))
        .route("/translate/subtitle", post(handlers::translate_subtitles))
        .route("/translate/text", post(handlers::translate_text))
        .route("/detect/language", post(handlers::detect_language))
        .route("/transliterate", post(handlers::transliterate))
        .layer(cors)
        .with_state(state)
}

/// Bind the listener and serve until the process is stopped.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::from_config(&config);
    let app = build_router(state, &config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Translation gateway listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
