/*!
 * Prompt builders for the translation pipeline.
 *
 * Every request kind gets a dedicated builder that frames the model's role
 * and pins down the output format, so responses stay machine-parseable.
 */

/// Sentinel language/script name that asks the model to infer the source.
pub const AUTO_DETECT: &str = "Auto-detect";

/// Build the prompt for one batch of subtitle cues.
///
/// The input texts are embedded as a pretty-printed JSON array with
/// non-ASCII characters preserved verbatim, and the model is instructed to
/// answer with a JSON array of exactly the same length and order.
pub fn subtitle_batch_prompt(texts: &[String], source_lang: &str, target_lang: &str) -> String {
    let serialized = serde_json::to_string_pretty(texts).unwrap_or_default();

    format!(
        "You are a professional subtitle translator. \
         Translate the following subtitle texts from {source_lang} to {target_lang}.\n\n\
         CRITICAL INSTRUCTIONS:\n\
         - Translate ONLY the text content\n\
         - Maintain the EXACT same number of lines as the original\n\
         - Preserve line breaks within each subtitle\n\
         - Keep the same tone and context\n\
         - Do NOT add explanations or comments\n\
         - Return ONLY a JSON array of translated strings\n\n\
         Input ({count} subtitles):\n\
         {serialized}\n\n\
         Output format:\n\
         Return a JSON array with {count} translated strings in the same order.\n\n\
         Example:\n\
         [\"Translated text 1\", \"Translated text 2\", ...]",
        count = texts.len(),
    )
}

/// Build the prompt for plain text translation.
///
/// When the source language is the [`AUTO_DETECT`] sentinel, the prompt
/// omits the source clause and lets the model infer it.
pub fn text_translation_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    let source_instruction = if source_lang == AUTO_DETECT {
        String::new()
    } else {
        format!("from {source_lang} ")
    };

    format!(
        "You are a professional translator. \
         Translate the following text {source_instruction}to {target_lang}.\n\n\
         INSTRUCTIONS:\n\
         - Provide ONLY the translated text, nothing else\n\
         - Preserve the original formatting (paragraphs, line breaks)\n\
         - Keep the same tone and style\n\
         - Do NOT add explanations, notes, or comments\n\n\
         Text to translate:\n{text}"
    )
}

/// Build the prompt for the plain `/translate` chat endpoint.
pub fn chat_translation_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    format!(
        "Translate the following text from {source_lang} to {target_lang}.\n\
         Only provide the translation, no explanations or additional text.\n\n\
         Text to translate: {text}"
    )
}

/// Build the prompt for language detection.
///
/// The model must answer with a JSON object carrying the language name and
/// a confidence score in [0, 1].
pub fn language_detection_prompt(text: &str) -> String {
    format!(
        "You are a language identification expert. \
         Detect the language of the following text.\n\n\
         INSTRUCTIONS:\n\
         - Return ONLY a JSON object with two keys: \"language\" and \"confidence\"\n\
         - \"language\" should be the full English name of the language (e.g. \"Spanish\", \"Japanese\")\n\
         - \"confidence\" should be a float between 0 and 1 indicating how confident you are\n\
         - Do NOT add any explanation or text outside the JSON\n\n\
         Text:\n{text}"
    )
}

/// Build the prompt for transliteration between writing systems.
///
/// Transliteration converts sound, not meaning, and the prompt says so
/// explicitly while naming both the source and target scripts.
pub fn transliteration_prompt(text: &str, source_script: &str, target_script: &str) -> String {
    let source_instruction = if source_script == AUTO_DETECT {
        "First identify the script/writing system of the text. ".to_string()
    } else {
        format!("The text is written in {source_script} script. ")
    };

    format!(
        "You are a professional transliteration expert with deep knowledge of writing systems worldwide.\n\n\
         {source_instruction}\
         Transliterate the following text into {target_script}.\n\n\
         CRITICAL INSTRUCTIONS:\n\
         - Transliteration means converting the SOUND/PRONUNCIATION of the text into the target script, NOT translating the meaning\n\
         - Preserve the original pronunciation as accurately as possible\n\
         - Use standard/widely-accepted transliteration conventions:\n\
           * For Latin/Roman output: use the most common romanization system for the source language \
         (e.g., Hepburn for Japanese, Pinyin for Chinese, IAST-inspired for Hindi/Sanskrit, \
         ISO 233 inspired for Arabic)\n\
           * For non-Latin output: use the standard script conventions of the target writing system\n\
         - Preserve spacing, punctuation, and line breaks\n\
         - Keep numbers as-is unless they are written in a non-Latin numeral system and target is Latin\n\
         - Do NOT translate the meaning - only convert the script\n\
         - Do NOT add any explanations, notes, or annotations\n\n\
         Return ONLY a JSON object with these keys:\n\
         - \"source_script\": the detected or confirmed source script name (e.g. \"Devanagari\", \"Arabic\", \"Katakana\")\n\
         - \"result\": the transliterated text\n\n\
         Text to transliterate:\n{text}"
    )
}
