//! Shared error type across demlens crates.

use thiserror::Error;

/// Stable error classification (used by tests and CLI output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Read past the end of the available bytes.
    BufferUnderrun,
    /// Varint without a terminator inside the group cap.
    CorruptVarint,
    /// Replay magic mismatch.
    InvalidFormat,
    /// Outer frame kind not in the demo table.
    UnknownMessageKind,
    /// Inner packet record kind not in the net table.
    UnknownSubMessageKind,
    /// User message discriminator not in the user table.
    UnknownUserMessageKind,
    /// Game event referencing an id not yet described.
    UnknownEventSchema,
    /// Game event keys do not line up with the descriptor.
    EventFieldMismatch,
    /// Compressed payload could not be inflated.
    Decompress,
    /// Payload could not be snappy-compressed (stream writer).
    Compress,
    /// Payload bytes did not decode as the expected message.
    Decode,
    /// An observer failed.
    Hook,
    /// Invalid configuration.
    Config,
    /// Filesystem failure.
    Io,
}

impl ErrorCode {
    /// String representation used in CLI output and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BufferUnderrun => "BUFFER_UNDERRUN",
            ErrorCode::CorruptVarint => "CORRUPT_VARINT",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UnknownMessageKind => "UNKNOWN_MESSAGE_KIND",
            ErrorCode::UnknownSubMessageKind => "UNKNOWN_SUB_MESSAGE_KIND",
            ErrorCode::UnknownUserMessageKind => "UNKNOWN_USER_MESSAGE_KIND",
            ErrorCode::UnknownEventSchema => "UNKNOWN_EVENT_SCHEMA",
            ErrorCode::EventFieldMismatch => "EVENT_FIELD_MISMATCH",
            ErrorCode::Decompress => "DECOMPRESS",
            ErrorCode::Compress => "COMPRESS",
            ErrorCode::Decode => "DECODE",
            ErrorCode::Hook => "HOOK",
            ErrorCode::Config => "CONFIG",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DemError>;

/// Unified error type used by core and parser.
#[derive(Debug, Error)]
pub enum DemError {
    #[error("buffer underrun: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun { needed: usize, remaining: usize },
    #[error("corrupt varint: no terminator within 5 groups")]
    CorruptVarint,
    #[error("invalid replay: incorrect filestamp {0:?}")]
    InvalidFormat(Vec<u8>),
    #[error("unknown message kind: {0}")]
    UnknownMessageKind(u64),
    #[error("unknown packet sub-message kind: {0}")]
    UnknownSubMessageKind(u64),
    #[error("unknown user message kind: {0}")]
    UnknownUserMessageKind(i32),
    #[error("unknown game event schema: event id {0}")]
    UnknownEventSchema(i32),
    #[error("game event {event_id} does not match its descriptor: {reason}")]
    EventFieldMismatch { event_id: i32, reason: String },
    #[error("decompress failed: {0}")]
    Decompress(String),
    #[error("compress failed: {0}")]
    Compress(String),
    #[error("decode {kind} failed: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: prost::DecodeError,
    },
    #[error("hook failed: {0}")]
    Hook(String),
    #[error("config: {0}")]
    Config(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl DemError {
    /// Map to the stable classification.
    pub fn code(&self) -> ErrorCode {
        match self {
            DemError::BufferUnderrun { .. } => ErrorCode::BufferUnderrun,
            DemError::CorruptVarint => ErrorCode::CorruptVarint,
            DemError::InvalidFormat(_) => ErrorCode::InvalidFormat,
            DemError::UnknownMessageKind(_) => ErrorCode::UnknownMessageKind,
            DemError::UnknownSubMessageKind(_) => ErrorCode::UnknownSubMessageKind,
            DemError::UnknownUserMessageKind(_) => ErrorCode::UnknownUserMessageKind,
            DemError::UnknownEventSchema(_) => ErrorCode::UnknownEventSchema,
            DemError::EventFieldMismatch { .. } => ErrorCode::EventFieldMismatch,
            DemError::Decompress(_) => ErrorCode::Decompress,
            DemError::Compress(_) => ErrorCode::Compress,
            DemError::Decode { .. } => ErrorCode::Decode,
            DemError::Hook(_) => ErrorCode::Hook,
            DemError::Config(_) => ErrorCode::Config,
            DemError::Io(_) => ErrorCode::Io,
        }
    }

    /// Schema-dependent failures skip one event; everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DemError::UnknownEventSchema(_) | DemError::EventFieldMismatch { .. }
        )
    }
}
