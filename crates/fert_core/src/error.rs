use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Invalid soil type or crop type. Please use valid values.")]
    InvalidCategory,

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Predicted class {0} has no fertilizer label")]
    UnknownClass(usize),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
