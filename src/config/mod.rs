pub mod app_config;
pub mod model;

pub use app_config::{ConfigError, DEFAULT_CONFIG_PATH, load_config, validate_config_path};
pub use model::ProbeConfig;
