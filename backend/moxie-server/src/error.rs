use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] moxie_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Startup error: {message}")]
    Startup { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
