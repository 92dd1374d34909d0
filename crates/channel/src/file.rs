//! File-backed badge channel.

use std::path::{Path, PathBuf};

use crate::{BadgeChannel, ChannelError};

/// Durable channel backend: one `{key}.json` file per entry.
///
/// This is the localStorage analog for process-separated screens -- the
/// list screen's process can exit between the write and the badge view's
/// read. Writes go to a temp file first and are renamed into place, so a
/// torn write never leaves a half-readable entry.
#[derive(Debug, Clone)]
pub struct FileChannel {
    dir: PathBuf,
}

impl FileChannel {
    /// Create a channel rooted at `dir`. The directory is created on first
    /// write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the entries live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, ChannelError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Keys are slugs plus the `badge-` prefix, so anything outside
/// `[A-Za-z0-9_-]` (in particular path separators) is rejected rather than
/// handed to the filesystem.
fn validate_key(key: &str) -> Result<(), ChannelError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ChannelError::InvalidKey(key.to_string()))
    }
}

#[async_trait::async_trait]
impl BadgeChannel for FileChannel {
    async fn put(&self, key: &str, value: &str) -> Result<(), ChannelError> {
        let path = self.entry_path(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp = self.dir.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!(key = %key, path = %path.display(), "Stored channel entry");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, ChannelError> {
        let path = self.entry_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
