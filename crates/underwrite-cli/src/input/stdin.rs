use serde::de::DeserializeOwned;
use std::io::{self, Read};

use underwrite_core::{UnderwriteError, UnderwriteResult};

/// Read a JSON document from stdin when data is being piped.
/// Returns None if stdin is a TTY (interactive) or the pipe is empty.
pub fn read_piped<T: DeserializeOwned>() -> UnderwriteResult<Option<T>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| UnderwriteError::Io(format!("Failed to read stdin: {}", e)))?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(trimmed)?))
}
