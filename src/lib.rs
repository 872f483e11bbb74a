pub mod config;
pub mod pipeline;

pub use config::{Config, ConfigError};
pub use pipeline::{run_pipeline, PipelineError};
