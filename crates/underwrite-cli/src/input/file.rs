use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use underwrite_core::{UnderwriteError, UnderwriteResult};

/// Read a JSON or YAML document into a typed struct. The parser is
/// chosen by file extension; anything that is not `.yaml`/`.yml` is
/// treated as JSON.
pub fn read_document<T: DeserializeOwned>(path: &str) -> UnderwriteResult<T> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| UnderwriteError::Io(format!("Failed to read '{}': {}", resolved.display(), e)))?;

    let is_yaml = resolved
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| {
            UnderwriteError::SerializationError(format!(
                "Failed to parse '{}': {}",
                resolved.display(),
                e
            ))
        })
    } else {
        serde_json::from_str(&contents).map_err(|e| {
            UnderwriteError::SerializationError(format!(
                "Failed to parse '{}': {}",
                resolved.display(),
                e
            ))
        })
    }
}

/// Resolve a possibly-relative path and check it points at a file.
fn resolve_path(path: &str) -> UnderwriteResult<PathBuf> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| UnderwriteError::Io(e.to_string()))?
            .join(p)
    };

    if !resolved.exists() {
        return Err(UnderwriteError::Io(format!(
            "File not found: {}",
            resolved.display()
        )));
    }

    if !resolved.is_file() {
        return Err(UnderwriteError::Io(format!("Not a file: {}", resolved.display())));
    }

    Ok(resolved)
}
