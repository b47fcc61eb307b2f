pub mod pipeline;
pub mod scheduler;
