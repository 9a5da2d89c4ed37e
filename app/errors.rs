use std::io;

use amf_formats::errors::AmfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("amf error: {0}")]
    Amf(#[from] AmfError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input is not valid hex text")]
    InvalidHex,
    #[error("got unexpected log level: {0}")]
    InvalidLogLevel(String),
}

pub(crate) type AppResult<T> = Result<T, AppError>;
