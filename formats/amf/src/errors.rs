use std::{io, string};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AmfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid utf8 data: {0}")]
    InvalidUtf8(#[from] string::FromUtf8Error),
    #[error("truncated input, need {needed} bytes but only {remaining} remain")]
    Truncated { needed: usize, remaining: usize },
    #[error("unexpected amf value marker: {found}, expect: {expected}")]
    UnexpectedMarker { expected: u8, found: u8 },
    #[error("unsupported amf value marker: {marker}")]
    Unsupported { marker: u8 },
    #[error("expect object end marker, got: {found}")]
    MissingObjectEnd { found: u8 },
    #[error("string length out of range, length: {length}")]
    StringTooLong { length: usize },
}

pub type AmfResult<T> = Result<T, AmfError>;
