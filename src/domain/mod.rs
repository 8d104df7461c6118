mod job;
mod job_id;
mod job_status;
mod segment;
pub mod srt;
mod stage_timings;

pub use job::Job;
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use segment::{Segment, TimedText, TranslatedSegment};
pub use stage_timings::StageTimings;
