pub mod config;
pub mod dataset;
pub mod encode;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod progress;

pub use config::{ColumnPair, PipelineConfig};
pub use dataset::Dataset;
pub use error::EncodeError;
pub use pipeline::{ExportSummary, Pipeline};
