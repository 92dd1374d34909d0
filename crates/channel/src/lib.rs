//! Shared key-value channel between the list screen and the badge view.
//!
//! The two screens are decoupled: the list screen writes a serialized badge
//! record under `badge-{slug}`, navigates away, and the badge view reads
//! the record back by key with no other communication path. The browser
//! original used origin-scoped localStorage as that mailbox;
//! [`BadgeChannel`] abstracts it so the handoff works the same over an
//! in-memory map ([`MemoryChannel`]) or a directory of JSON files
//! ([`FileChannel`]).
//!
//! Entries never expire and are never cleaned up; a second write to the
//! same key silently overwrites the first (slug collisions are not
//! detected -- last print wins).

pub mod file;
pub mod memory;

pub use file::FileChannel;
pub use memory::MemoryChannel;

/// Errors from a badge channel backend.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The backing store could not be read or written.
    #[error("Channel I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters a backend cannot represent.
    #[error("Invalid channel key '{0}'")]
    InvalidKey(String),
}

/// A persistent key-value mailbox for serialized badge records.
#[async_trait::async_trait]
pub trait BadgeChannel: Send + Sync {
    /// Store `value` under `key`, overwriting any previous entry.
    async fn put(&self, key: &str, value: &str) -> Result<(), ChannelError>;

    /// Fetch the entry at `key`, or `None` if nothing was ever stored
    /// there.
    async fn get(&self, key: &str) -> Result<Option<String>, ChannelError>;
}
