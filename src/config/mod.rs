pub mod settings;

pub use settings::{ApiSettings, AppConfig, PipelineSettings, ResolverSource};
