/*!
 * # Translation Gateway
 *
 * An HTTP backend that brokers text and subtitle translation, language
 * detection, and transliteration requests to upstream AI providers,
 * keeping the provider API keys on the server side.
 *
 * ## Features
 *
 * - Batched subtitle translation with bounded retry and backoff
 * - Plain text translation with source-language auto-detection
 * - Language detection with confidence scoring
 * - Transliteration between writing systems
 * - Known-origin CORS and boundary validation on every route
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration loading and validation
 * - `api`: HTTP request/response schemas and route handlers
 * - `server`: Router assembly and startup
 * - `translation`: The translation pipeline:
 *   - `translation::prompts`: Prompt builders for every request kind
 *   - `translation::parser`: Fence stripping and shape-checked decoding
 *   - `translation::retry`: Bounded retry with exponential backoff
 *   - `translation::batch`: Sequential batched subtitle translation
 *   - `translation::core`: Single-call services
 * - `providers`: Clients for the upstream AI services:
 *   - `providers::chipp`: Chat-completion endpoint client
 *   - `providers::gemini`: Generative text endpoint client
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod api;
pub mod app_config;
pub mod errors;
pub mod providers;
pub mod server;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{ApiError, ConfigError, ProviderError};
pub use server::AppState;
pub use translation::{BatchTranslator, RetryPolicy, SubtitleCue, TranslatedCue};
