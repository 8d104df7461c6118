mod generate_subtitles;
mod health;
mod root;
mod task_status;

pub use generate_subtitles::{generate_subtitles_handler, GenerateRequest, GenerateResponse};
pub use health::health_handler;
pub use root::root_handler;
pub use task_status::{task_status_handler, TaskStatusResponse};
