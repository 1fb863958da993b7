use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Why the log could not be read. Both cases are recoverable: the audit
/// continues with an empty line set.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("错误：找不到文件 {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("读取文件时发生错误：{source}: '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the whole log file into lines. The file is closed before returning.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let lines: Vec<String> = text.lines().map(str::to_owned).collect();
    debug!(path = %path.display(), lines = lines.len(), "read log file");
    Ok(lines)
}

/// Log lines plus the diagnostic for a failed read, if any.
#[derive(Debug, Default)]
pub struct LoadedLog {
    pub lines: Vec<String>,
    pub error: Option<ReadError>,
}

/// Best-effort read: a failure is recorded and yields no lines.
pub fn load_log(path: &Path) -> LoadedLog {
    match read_log_lines(path) {
        Ok(lines) => LoadedLog { lines, error: None },
        Err(err) => {
            debug!(path = %path.display(), error = %err, "log file unavailable, auditing empty input");
            LoadedLog {
                lines: Vec::new(),
                error: Some(err),
            }
        }
    }
}
