mod jsonl;
mod report;

pub use jsonl::{flush_to_jsonl, read_evaluations};
pub use report::{log_best, log_evaluations};
