//! Error type shared by every algorithm in the crate.

/// Failure cases surfaced to the hosting application.
///
/// Every variant carries a human-readable detail string; hosts that need to
/// branch on the kind match on the variant, hosts that only report use
/// `Display`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgoError {
    /// Input shape does not match the content it is scored against, for
    /// example an answer count or answer index mismatch.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The referenced track does not exist in the content catalog.
    #[error("unknown track: {0}")]
    UnknownTrack(String),

    /// The catalog has no usable content for an operation that requires it.
    #[error("empty catalog: {0}")]
    EmptyCatalog(String),
}
