//! Error types for measurement info handling

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FiffError>;

/// Errors raised while building or restricting measurement info
#[derive(Debug, Error)]
pub enum FiffError {
    /// A selection passed to `pick_info` refers to a channel that does not exist
    #[error("invalid selection: channel index {index} out of range for {nchan} channels")]
    InvalidSelection { index: usize, nchan: usize },

    /// Channel descriptors and names (or the declared count) disagree
    #[error("channel count mismatch: nchan={nchan}, descriptors={chs}, names={names}")]
    ChannelCountMismatch {
        nchan: usize,
        chs: usize,
        names: usize,
    },

    /// A binary channel or transform record is shorter than its fixed layout
    #[error("{record} record too short: {len} bytes (expected {expected})")]
    RecordTooShort {
        record: &'static str,
        len: usize,
        expected: usize,
    },

    /// Cursor read or write failure while decoding or encoding a record
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
