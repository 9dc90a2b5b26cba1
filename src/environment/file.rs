//! Environment file reading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::EmptyFilePolicy;
use crate::error::Result;

/// Read the environment name stored at `path`.
///
/// One trailing line terminator (`\n` or `\r\n`) is removed and everything
/// else is returned as written, including inner whitespace. Returns `None`
/// when the file does not exist, or when it holds only whitespace and the
/// policy is [`EmptyFilePolicy::FallThrough`].
///
/// # Errors
///
/// Any read failure other than "not found" is returned as `Io`.
///
/// # Example
///
/// ```
/// use projenv::config::EmptyFilePolicy;
/// use projenv::environment::read_environment_file;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let path = temp.path().join(".environment");
/// std::fs::write(&path, "develop\n").unwrap();
///
/// let name = read_environment_file(&path, EmptyFilePolicy::FallThrough).unwrap();
/// assert_eq!(name.as_deref(), Some("develop"));
/// ```
pub fn read_environment_file(path: &Path, policy: EmptyFilePolicy) -> Result<Option<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let value = strip_line_terminator(&content);

    if value.trim().is_empty() && policy == EmptyFilePolicy::FallThrough {
        debug!("Ignoring empty environment file {}", path.display());
        return Ok(None);
    }

    Ok(Some(value.to_string()))
}

fn strip_line_terminator(content: &str) -> &str {
    content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content)
}
