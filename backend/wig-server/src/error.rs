use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid bind address: {source}")]
    InvalidBindAddr { source: std::net::AddrParseError },

    #[error("Environment variable error: {message}")]
    EnvVar { message: String },

    #[error("Logger initialization failed: {source}")]
    Logger {
        #[from]
        source: log::SetLoggerError,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
