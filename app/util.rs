use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use utils::bytes::{bytes_to_hex, hex_to_bytes};

use crate::errors::{AppError, AppResult};

pub(crate) fn parse_log_level(level: &str) -> AppResult<tracing::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        other => Err(AppError::InvalidLogLevel(other.to_string())),
    }
}

pub(crate) fn read_input(path: &Path) -> AppResult<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read(path)?)
}

pub(crate) fn write_output(path: Option<&Path>, data: &[u8]) -> AppResult<()> {
    match path {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Whitespace, including line breaks, is ignored.
pub(crate) fn decode_hex(text: &[u8]) -> AppResult<Vec<u8>> {
    let text = std::str::from_utf8(text).map_err(|_| AppError::InvalidHex)?;
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex_to_bytes(&compact).ok_or(AppError::InvalidHex)
}

pub(crate) fn encode_hex(data: &[u8]) -> Vec<u8> {
    let mut text = bytes_to_hex(data);
    text.push('\n');
    text.into_bytes()
}
