//! Aggregation pipeline: one places search fanned out to per-place
//! review-site lookups, merged into ordered [`nogi_core::DisplayRecord`]s.

pub mod error;
pub mod merge;
pub mod pipeline;
pub mod source;

pub use error::PipelineError;
pub use merge::merge_record;
pub use pipeline::AggregationPipeline;
pub use source::PlaceSource;
