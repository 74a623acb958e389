//! Commands module - handlers behind each CLI subcommand
//!
//! Provides:
//! - find: print the highest-scoring word of a sentence
//! - explain: replay the fold step by step
//! - demo: the built-in "volcano climbing" example

pub mod explain;
pub mod find;

use std::io::Read;

use crate::core::error::InputError;

/// Resolve the sentence from an argument, or read it whole from `reader`.
///
/// Only a single trailing `\n` or `\r\n` is stripped from read input.
pub fn read_sentence<R: Read>(arg: Option<String>, mut reader: R) -> Result<String, InputError> {
    if let Some(sentence) = arg {
        return Ok(sentence);
    }

    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let mut sentence = String::from_utf8(buf)?;

    if sentence.ends_with('\n') {
        sentence.pop();
        if sentence.ends_with('\r') {
            sentence.pop();
        }
    }
    log::debug!("read {} bytes of input", sentence.len());
    Ok(sentence)
}
