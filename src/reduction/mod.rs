pub mod job;
pub mod pipeline;

pub use job::{ReductionJob, RunSummary};
pub use pipeline::{Pipeline, ReducedSample, Reduction};
