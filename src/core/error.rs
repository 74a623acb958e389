//! Input errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to read input")]
    Read(#[from] std::io::Error),

    #[error("unknown format: {0} (expected raw, jsonl, json or md)")]
    UnknownFormat(String),
}
