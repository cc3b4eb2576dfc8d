use std::fs;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CountError;

/// Everything that is neither a Unicode word character nor whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Strips punctuation, lowercases and splits on whitespace runs. Text that
/// is already lowercase words separated by whitespace passes through as-is.
pub fn normalize(text: &str) -> Vec<String> {
    let stripped = NON_WORD.replace_all(text, "");
    stripped
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Reads the whole file at `path` as UTF-8 and normalizes it into a token
/// sequence. Both counters start from here.
pub fn read_tokens(path: Option<&Path>) -> Result<Vec<String>, CountError> {
    let path = path.ok_or(CountError::InvalidArgument)?;
    if !path.is_file() {
        return Err(CountError::NotFound(path.to_owned()));
    }
    let text = fs::read_to_string(path)?;
    let tokens = normalize(&text);
    debug!("normalized {} into {} token(s)", path.display(), tokens.len());
    Ok(tokens)
}
