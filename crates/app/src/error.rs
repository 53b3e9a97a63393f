use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid setting {0}")]
    Setting(String),
    #[error("log filter error: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}
