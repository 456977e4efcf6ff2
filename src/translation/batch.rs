/*!
 * Batched subtitle translation.
 *
 * This module contains functionality for translating subtitle cues in
 * fixed-size batches, with retry and per-cue fallback handling. Batches
 * are processed strictly sequentially and in order, so the output list
 * always lines up with the input.
 */

use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::TextGenerator;

use super::parser;
use super::prompts;
use super::retry::RetryPolicy;

/// A single subtitle cue supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubtitleCue {
    /// Caller-supplied identifier, passed through untouched
    pub id: String,
    /// Original text
    pub text: String,
}

/// A translated subtitle cue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslatedCue {
    /// Caller-supplied identifier
    pub id: String,
    /// Original text
    pub text: String,
    /// Produced translation (or the original text when the model returned
    /// fewer entries than the batch holds)
    pub translated_text: String,
}

/// Batch translator for processing subtitle cues through a generative model
#[derive(Debug)]
pub struct BatchTranslator {
    /// The transport used for every batch call
    generator: Arc<dyn TextGenerator>,

    /// Retry policy applied to each batch call
    retry: RetryPolicy,
}

impl BatchTranslator {
    /// Create a new batch translator
    pub fn new(generator: Arc<dyn TextGenerator>, retry: RetryPolicy) -> Self {
        Self { generator, retry }
    }

    /// Translate all cues, splitting into batches of at most `batch_size`.
    ///
    /// Batches run one after another; a batch's network call and any
    /// retries complete before the next batch starts. The output preserves
    /// the input order and always has the same length as `cues`. A batch
    /// that still fails after the retry budget fails the whole request.
    pub async fn translate_all(
        &self,
        cues: &[SubtitleCue],
        source_lang: &str,
        target_lang: &str,
        batch_size: usize,
    ) -> Result<Vec<TranslatedCue>, ProviderError> {
        let batch_count = cues.len().div_ceil(batch_size);
        info!(
            "Translating {} cues ({} -> {}) in {} batches",
            cues.len(),
            source_lang,
            target_lang,
            batch_count
        );

        let mut all_translated = Vec::with_capacity(cues.len());

        for (batch_idx, batch) in cues.chunks(batch_size).enumerate() {
            info!(
                "Batch {}/{} ({} cues)",
                batch_idx + 1,
                batch_count,
                batch.len()
            );
            let translated = self
                .translate_batch(batch, source_lang, target_lang)
                .await?;
            all_translated.extend(translated);
        }

        Ok(all_translated)
    }

    /// Send one batch through the retry controller and zip the parsed
    /// result back onto the cues.
    async fn translate_batch(
        &self,
        batch: &[SubtitleCue],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<TranslatedCue>, ProviderError> {
        let texts: Vec<String> = batch.iter().map(|cue| cue.text.clone()).collect();
        let prompt = prompts::subtitle_batch_prompt(&texts, source_lang, target_lang);

        // Parsing happens inside the attempt, so a malformed response
        // consumes the same retry budget as a transport failure.
        let generator = &self.generator;
        let prompt = &prompt;
        let translated_texts = self
            .retry
            .run(move || async move {
                let raw = generator.generate(prompt).await?;
                parser::parse_string_array(&raw)
            })
            .await?;

        if translated_texts.len() < batch.len() {
            warn!(
                "Model returned {} translations for a batch of {}; missing cues keep their original text",
                translated_texts.len(),
                batch.len()
            );
        }

        let result = batch
            .iter()
            .enumerate()
            .map(|(idx, cue)| TranslatedCue {
                id: cue.id.clone(),
                text: cue.text.clone(),
                translated_text: translated_texts
                    .get(idx)
                    .cloned()
                    .unwrap_or_else(|| cue.text.clone()),
            })
            .collect();

        Ok(result)
    }
}
