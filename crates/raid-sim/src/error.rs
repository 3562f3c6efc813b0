//! Error types returned by the RAID controllers and shard codecs.

use thiserror::Error;

use crate::controller::RaidLevel;

/// Result type alias using [`RaidError`].
pub type Result<T> = std::result::Result<T, RaidError>;

/// Errors that can occur while building or driving a simulated array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaidError {
    /// Too few (or an unsupported number of) members for the level.
    #[error("{level} requires {requirement}. Provided: {members}")]
    InvalidMemberCount {
        level: RaidLevel,
        members: usize,
        requirement: &'static str,
    },

    #[error("stripe size (chunk unit size) must be greater than 0")]
    InvalidStripeSize,

    /// Offset or length outside the addressable range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("disk index {index} out of bounds for {disks} disks")]
    IndexOutOfRange { index: usize, disks: usize },

    #[error("disk {0} not found in array")]
    DiskNotFound(usize),

    /// A RAID0 chunk needed by a read is gone.
    #[error("missing stripe data at disk {disk}, chunk {chunk}")]
    ChunkUnavailable { disk: usize, chunk: usize },

    #[error("no healthy mirror holds chunk {chunk}")]
    NoHealthyMirror { chunk: usize },

    #[error("both disks of mirror pair {pair} lost chunk {chunk}")]
    MirrorPairLost { pair: usize, chunk: usize },

    #[error("too many missing shards ({missing}), only {parity} parity shards available")]
    TooManyMissingShards { missing: usize, parity: usize },

    #[error("read start offset {start} is beyond total data stored {stored}")]
    OffsetBeyondData { start: u64, stored: usize },

    #[error("no data has been written to the array yet")]
    NoDataWritten,

    /// A codec was handed a shard set it cannot work with.
    #[error("shard layout mismatch: {0}")]
    ShardMismatch(String),

    /// The underlying erasure-coding library rejected the operation.
    #[error("erasure codec failure: {0}")]
    Codec(String),
}
