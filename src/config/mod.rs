mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ApiConfig, Config, OutputConfig, SearchConfig};
