use std::sync::Arc;

use crate::application::ports::{TranslationClient, TranslationError};
use crate::domain::{Segment, TranslatedSegment};

/// How many immediately preceding segments of the same batch are injected
/// as context ahead of each source line.
const CONTEXT_WINDOW: usize = 3;

pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Turns an ordered segment sequence into an equal-length, order-preserving
/// translated sequence, grouping segments into batches so one collaborator
/// call covers several segments with cross-segment context.
///
/// A batch whose response cannot be parsed back into exactly one line per
/// segment is retried segment by segment; only a failure of that fallback
/// path is surfaced to the caller.
pub struct BatchTranslator<L> {
    client: Arc<L>,
    batch_size: usize,
}

impl<L: TranslationClient> BatchTranslator<L> {
    pub fn new(client: Arc<L>, batch_size: usize) -> Self {
        Self {
            client,
            batch_size: batch_size.max(1),
        }
    }

    /// Translates all segments into `target_language`.
    ///
    /// When no credential is configured the input is returned unchanged;
    /// degrading to passthrough is deliberate, not an error.
    pub async fn translate_all(
        &self,
        segments: &[Segment],
        target_language: &str,
    ) -> Result<Vec<TranslatedSegment>, TranslationError> {
        if !self.client.is_configured() {
            tracing::info!(
                segments = segments.len(),
                "No translation credential configured, passing subtitles through untranslated"
            );
            return Ok(segments
                .iter()
                .map(|s| TranslatedSegment::from_segment(s, s.text.clone()))
                .collect());
        }

        let mut translated = Vec::with_capacity(segments.len());

        for batch in segments.chunks(self.batch_size) {
            match self.translate_batch(batch, target_language).await {
                Ok(texts) => {
                    translated.extend(
                        batch
                            .iter()
                            .zip(texts)
                            .map(|(segment, text)| TranslatedSegment::from_segment(segment, text)),
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        batch_len = batch.len(),
                        "Batch translation failed, falling back to per-segment calls"
                    );
                    for segment in batch {
                        let text = self.translate_one(&segment.text, target_language).await?;
                        translated.push(TranslatedSegment::from_segment(segment, text));
                    }
                }
            }
        }

        Ok(translated)
    }

    /// One collaborator call for a whole batch. Returns exactly one
    /// translation per segment or an error that triggers the fallback.
    async fn translate_batch(
        &self,
        batch: &[Segment],
        target_language: &str,
    ) -> Result<Vec<String>, TranslationError> {
        let prompt = build_batch_prompt(batch, target_language);
        let response = self.client.complete(&prompt).await?;
        let lines = parse_batch_response(&response);

        if lines.len() != batch.len() {
            return Err(TranslationError::InvalidResponse(format!(
                "expected {} translated lines, got {}",
                batch.len(),
                lines.len()
            )));
        }

        Ok(lines)
    }

    /// Independent translation of a single text, used as the batch fallback.
    /// Failures here are job-fatal.
    pub async fn translate_one(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let prompt = format!(
            "Translate the following subtitle line into {}. \
             Reply with the translation only, no commentary.\n\n{}",
            target_language, text
        );
        let response = self.client.complete(&prompt).await?;
        Ok(response.trim().to_string())
    }
}

/// Builds the whole-batch prompt: an instruction, then for every segment up
/// to three immediately preceding same-batch segments as numbered context
/// lines followed by the segment's own numbered source line. Numbering is
/// 1-based and resets each batch.
fn build_batch_prompt(batch: &[Segment], target_language: &str) -> String {
    let mut prompt = format!(
        "Translate the following numbered subtitle segments into {}. \
         Keep the segment count: reply with exactly one translated line per \
         numbered segment, in order, prefixed with its [number]. \
         Context lines are for reference only and must not be translated again.\n",
        target_language
    );

    for (i, segment) in batch.iter().enumerate() {
        prompt.push('\n');
        let context_start = i.saturating_sub(CONTEXT_WINDOW);
        for (offset, previous) in batch[context_start..i].iter().enumerate() {
            prompt.push_str(&format!(
                "Context: [{}] {}\n",
                context_start + offset + 1,
                previous.text
            ));
        }
        prompt.push_str(&format!("Segment: [{}] {}\n", i + 1, segment.text));
    }

    prompt
}

/// Splits a model response into non-empty trimmed lines and strips any
/// leading `[<number>]` marker from each.
fn parse_batch_response(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_index_marker(line).to_string())
        .collect()
}

fn strip_index_marker(line: &str) -> &str {
    let Some(rest) = line.strip_prefix('[') else {
        return line;
    };
    let Some(close) = rest.find(']') else {
        return line;
    };
    let digits = &rest[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return line;
    }
    rest[close + 1..].trim_start()
}
