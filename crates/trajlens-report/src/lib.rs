//! Human-readable renderings of trajectories and detector results

mod analysis;
mod findings;
mod text;
mod transcript;

pub use analysis::{
    action_distribution, AnalysisReport, OBSERVATION_BUDGET, PROBLEM_STATEMENT_BUDGET,
    RESPONSE_BUDGET, SYSTEM_PROMPT_BUDGET,
};
pub use findings::{reproduction_record, search_record, tool_usage_record};
pub use text::truncate_chars;
pub use transcript::{render_transcript, write_transcript, TranscriptOptions, SEPARATOR_WIDTH};
