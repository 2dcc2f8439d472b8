//! Saving exported SVG documents.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while saving an exported document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save document: {0}")]
    Io(#[from] std::io::Error),

    #[error("No free filename near {0}")]
    Collision(PathBuf),
}

/// Abstraction over the platform "save as file" action.
pub trait ExportSink: Send + Sync {
    /// Persists `document` under (approximately) `filename`, returning where it went.
    fn save(&self, document: &str, filename: &str) -> Result<PathBuf, ExportError>;
}

/// Builds the export filename: `<prefix>-<unix-millis>.svg`.
pub fn export_filename(prefix: &str, unix_millis: i64) -> String {
    format!("{}-{}.svg", prefix, unix_millis)
}

/// Writes documents into a directory on disk.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    pub directory: PathBuf,
}

/// Maximum number of millisecond bumps tried before giving up on a name.
const MAX_NAME_ATTEMPTS: i64 = 1000;

impl FileExportSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns a path in `directory` that does not exist yet.
    ///
    /// Timestamped names (`<prefix>-<millis>.svg`) are bumped one millisecond
    /// at a time until free; other names are used as given.
    fn free_path(&self, directory: &Path, filename: &str) -> Result<PathBuf, ExportError> {
        let candidate = directory.join(filename);
        if !candidate.exists() {
            return Ok(candidate);
        }

        let Some((prefix, millis)) = split_timestamped(filename) else {
            return Err(ExportError::Collision(candidate));
        };
        for bump in 1..=MAX_NAME_ATTEMPTS {
            let path = directory.join(export_filename(prefix, millis + bump));
            if !path.exists() {
                return Ok(path);
            }
        }
        Err(ExportError::Collision(candidate))
    }
}

impl ExportSink for FileExportSink {
    fn save(&self, document: &str, filename: &str) -> Result<PathBuf, ExportError> {
        let directory = ensure_directory_exists(&self.directory)?;
        let file_path = self.free_path(&directory, filename)?;

        log::info!(
            "Saving drawing to: {} ({} bytes)",
            file_path.display(),
            document.len()
        );

        fs::write(&file_path, document)?;

        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
        }

        Ok(file_path)
    }
}

fn split_timestamped(filename: &str) -> Option<(&str, i64)> {
    let stem = filename.strip_suffix(".svg")?;
    let (prefix, millis) = stem.rsplit_once('-')?;
    Some((prefix, millis.parse().ok()?))
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
