mod batch_translator;
mod pipeline_service;

pub use batch_translator::{BatchTranslator, DEFAULT_BATCH_SIZE};
pub use pipeline_service::{PipelineError, PipelineService};
