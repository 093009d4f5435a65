//! Chunked Analyzer: orchestrates the two-pass analysis pipeline.
//!
//! Flow: resolve category instruction → chunk document text → one request per
//! chunk (sequential, document order) → aggregate responses → follow-up
//! "suggested steps" request over the aggregate → markdown cleanup.
//!
//! Aggregation is best-effort: a failed chunk is logged and contributes
//! nothing, and the pipeline still returns a well-formed result. The only
//! fatal error is a missing generator configuration, which aborts before any
//! further dispatch.

use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::category::{analysis_instruction_for, follow_up_instruction_for};
use crate::analysis::chunker::{chunk_text, DEFAULT_MAX_CHUNK_CHARS};
use crate::analysis::markdown::to_plain_text;
use crate::analysis::prompts::{CHUNK_PROMPT_TEMPLATE, FOLLOW_UP_PROMPT_TEMPLATE};
use crate::llm_client::prompts::language_directive;
use crate::llm_client::{LlmError, TextGenerator};

/// Fatal pipeline errors. Everything below configuration level is absorbed
/// into the result instead of propagating.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("generator configuration: {0}")]
    Config(String),
}

/// Result of one category analysis: the two output strings plus chunk
/// counters for logging and API observability.
#[derive(Debug, Clone)]
pub struct RfpAnalysis {
    pub analysis: String,
    pub suggested_steps: String,
    pub chunks_total: usize,
    pub chunks_failed: usize,
}

/// Outcome of a single chunk request. Aggregation skips failures explicitly
/// instead of relying on suppressed errors.
enum ChunkOutcome {
    Success(String),
    Failed,
}

/// Runs the full chunked analysis for one document and category.
///
/// `category_label` may be any string: canonical labels resolve their
/// registered instructions, anything else falls back to the generic ones.
pub async fn analyze_rfp(
    llm: &dyn TextGenerator,
    document_text: &str,
    category_label: &str,
    language: &str,
) -> Result<RfpAnalysis, AnalyzeError> {
    let instruction = analysis_instruction_for(category_label);
    let directive = language_directive(language);

    let chunks = chunk_text(document_text, DEFAULT_MAX_CHUNK_CHARS);
    let chunks_total = chunks.len();
    info!(
        category = category_label,
        chunks = chunks_total,
        "Starting chunked analysis"
    );

    let mut outcomes = Vec::with_capacity(chunks_total);
    for (index, chunk) in chunks.iter().enumerate() {
        if chunk.trim().is_empty() {
            continue;
        }

        let prompt = build_chunk_prompt(category_label, chunk, instruction, &directive);
        match llm.generate(&prompt).await {
            Ok(text) => outcomes.push(ChunkOutcome::Success(text)),
            Err(LlmError::Config(msg)) => return Err(AnalyzeError::Config(msg)),
            Err(e) => {
                warn!(chunk_index = index, error = %e, "Chunk request failed; skipping its contribution");
                outcomes.push(ChunkOutcome::Failed);
            }
        }
    }

    let chunks_failed = outcomes
        .iter()
        .filter(|o| matches!(o, ChunkOutcome::Failed))
        .count();

    // Successful responses, joined in document order.
    let summary = outcomes
        .iter()
        .filter_map(|o| match o {
            ChunkOutcome::Success(text) => Some(text.as_str()),
            ChunkOutcome::Failed => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    let analysis_raw = format!("{category_label}: {}", summary.trim());

    // Second explicit dispatch: the model's answer is the steps output.
    // A non-config failure here degrades to empty steps, never to an error.
    let follow_up_prompt = build_follow_up_prompt(category_label, &summary);
    let steps_raw = match llm.generate(&follow_up_prompt).await {
        Ok(text) => text,
        Err(LlmError::Config(msg)) => return Err(AnalyzeError::Config(msg)),
        Err(e) => {
            warn!(category = category_label, error = %e, "Follow-up request failed; returning empty steps");
            String::new()
        }
    };

    info!(
        category = category_label,
        chunks = chunks_total,
        failed = chunks_failed,
        "Chunked analysis complete"
    );

    Ok(RfpAnalysis {
        analysis: to_plain_text(&analysis_raw),
        suggested_steps: to_plain_text(&steps_raw),
        chunks_total,
        chunks_failed,
    })
}

fn build_chunk_prompt(category: &str, chunk: &str, instruction: &str, directive: &str) -> String {
    CHUNK_PROMPT_TEMPLATE
        .replace("{category}", category)
        .replace("{chunk}", chunk)
        .replace("{instruction}", instruction)
        .replace("{language_directive}", directive)
}

fn build_follow_up_prompt(category: &str, summary: &str) -> String {
    FOLLOW_UP_PROMPT_TEMPLATE
        .replace("{instruction}", follow_up_instruction_for(category))
        .replace("{summary}", summary.trim())
}
