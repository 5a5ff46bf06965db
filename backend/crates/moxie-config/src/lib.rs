mod airstack_config;
mod app_config;
mod config;
mod environment;
mod error;
mod hub_config;
mod log_level;
mod logging_config;
mod server_config;


pub use airstack_config::AirstackConfig;
pub use app_config::AppConfig;
pub use config::Config;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use hub_config::HubConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_AIRSTACK_API_URL: &str = "https://api.airstack.xyz/gql";
pub const PRODUCTION_HUB_URL: &str = "https://hubs.airstack.xyz";
pub const DEVELOPMENT_HUB_URL: &str = "http://localhost:3010/hub";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
