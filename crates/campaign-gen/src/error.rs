use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("generation service error: {0}")]
    GenerationService(String),
    #[error("response decode error: {0}")]
    ResponseDecode(String),
    #[error("delivery failed after {attempts} attempts: {message}")]
    DeliveryTransport { attempts: u32, message: String },
}

pub type GenResult<T> = Result<T, GenError>;
