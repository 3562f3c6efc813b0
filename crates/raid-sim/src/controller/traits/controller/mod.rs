//! Controller trait shared by every RAID level.

use crate::controller::RaidLevel;
use crate::controller::traits::restore::Restore;
use crate::error::Result;
use crate::retention::disk::Disk;

/// RaidController is the operation contract every simulated array exposes.
///
/// Controllers are single-threaded and stateful; callers sharing one across
/// threads must serialize access themselves.
pub trait RaidController {
    /// The level this controller implements.
    fn level(&self) -> RaidLevel;

    /// Chunk size in bytes on every member.
    fn stripe_size(&self) -> usize;

    /// The member disks, in member order.
    fn disks(&self) -> &[Disk];

    /// Logical bytes addressable by reads: the highest offset ever written,
    /// rounded up to the layout's stripe unit.
    fn stored_bytes(&self) -> usize;

    /// write stores `data` at logical byte `offset`. Empty `data` is a no-op.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for unaddressable ranges, and for parity levels
    /// `TooManyMissingShards` when a partially written stripe cannot be reconstructed.
    fn write(&mut self, data: &[u8], offset: u64) -> Result<()>;

    /// read returns `length` logical bytes starting at `start`.
    ///
    /// A read running past the stored extent is truncated with a warning.
    ///
    /// # Errors
    /// Returns `NoDataWritten`, `OffsetBeyondData`, or the level's
    /// redundancy-exhausted error.
    fn read(&self, start: u64, length: usize) -> Result<Vec<u8>>;

    /// clear_disk discards every chunk of one member, simulating its total loss.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` (or `DiskNotFound` for RAID10) for an unknown member.
    fn clear_disk(&mut self, index: usize) -> Result<()>;

    /// Human-readable per-member health summary.
    fn status_string(&self) -> String;

    /// as_restore_mut returns a restoration trait object if supported.
    fn as_restore_mut(&mut self) -> Option<&mut dyn Restore> {
        None
    }
}
