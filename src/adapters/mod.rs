pub mod jsonl;
pub mod memory_log;
pub mod tracing_log;
