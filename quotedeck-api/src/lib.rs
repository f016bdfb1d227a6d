mod inner;

pub mod error;
pub mod model;
pub mod oauth;

pub use inner::{Config, ConfigBuilder, ConfigBuilderError, PipelineKind, API};

pub use reqwest;
