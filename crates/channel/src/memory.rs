//! In-memory badge channel.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::{BadgeChannel, ChannelError};

/// Process-local channel backend.
///
/// Suitable when both screens live in the same process, and for tests.
/// Entries vanish with the process; use [`crate::FileChannel`] when the
/// badge view may run after a restart.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait::async_trait]
impl BadgeChannel for MemoryChannel {
    async fn put(&self, key: &str, value: &str) -> Result<(), ChannelError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, ChannelError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }
}
