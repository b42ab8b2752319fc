//! Reading input text and writing processed output.

use crate::error::{IoError, Result};
use std::io::Read;
use std::path::Path;

/// Maximum input file size accepted (16MB).
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Reads a UTF-8 text file.
///
/// # Errors
///
/// Returns an error if the file is missing, larger than [`MAX_FILE_SIZE`],
/// unreadable, or not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use access_agents::io::read_file;
///
/// let content = read_file("article.txt").unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let size = std::fs::metadata(path_ref)
        .map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?
        .len();

    if size > MAX_FILE_SIZE {
        return Err(IoError::ReadFailed {
            path: path_str,
            reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
        }
        .into());
    }

    let bytes = std::fs::read(path_ref).map_err(|e| IoError::ReadFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| {
        IoError::ReadFailed {
            path: path_str,
            reason: format!("invalid UTF-8: {e}"),
        }
        .into()
    })
}

/// Reads all of standard input as UTF-8 text.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or is not valid UTF-8.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| IoError::ReadFailed {
            path: "<stdin>".to_string(),
            reason: e.to_string(),
        })?;
    Ok(buffer)
}

/// Writes content to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Builds the output file name for a processed input: `<stem>.<slug>.txt`.
///
/// # Examples
///
/// ```
/// use access_agents::io::output_file_name;
///
/// assert_eq!(output_file_name("notes/intro.md", "literal"), "intro.literal.txt");
/// assert_eq!(output_file_name("README", "visual"), "README.visual.txt");
/// ```
#[must_use]
pub fn output_file_name<P: AsRef<Path>>(input: P, slug: &str) -> String {
    let stem = input
        .as_ref()
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    format!("{stem}.{slug}.txt")
}
