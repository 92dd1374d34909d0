use regdesk_channel::ChannelError;
use regdesk_core::error::CoreError;
use regdesk_store::StoreError;

/// Errors surfaced to the operator by the desk screens.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    /// A domain-level error (validation, missing entity).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A registrant store round trip failed. Local state is unchanged.
    #[error("Registrant store call failed: {0}")]
    Store(#[from] StoreError),

    /// The badge channel write or read failed. For a print action this
    /// aborts the handoff before navigation.
    #[error("Badge channel failed: {0}")]
    Channel(#[from] ChannelError),

    /// A badge record could not be serialized or deserialized.
    #[error("Badge serialization failed: {0}")]
    Badge(#[from] serde_json::Error),

    /// A mutating action arrived while another one was still in flight.
    /// The triggering control should have been disabled.
    #[error("Another request is still in flight")]
    Busy,
}

/// Convenience alias for screen operation results.
pub type ScreenResult<T> = Result<T, ScreenError>;
