//! RAID controllers, one per level.
//!
//! RAID0, RAID1 and RAID10 share the striped-mirror engine; RAID5 and RAID6 share the
//! parity engine and differ only in codec shape and parity placement.

mod parity;
pub mod raid0;
pub mod raid1;
pub mod raid10;
pub mod raid5;
pub mod raid6;
mod striped;
pub mod traits;

use std::fmt;

use tracing::warn;

use crate::error::{RaidError, Result};
use crate::layout::geometry::Span;
use crate::controller::traits::controller::RaidController;

pub use parity::ParityPlacement;
pub use raid0::Raid0Controller;
pub use raid1::Raid1Controller;
pub use raid10::Raid10Controller;
pub use raid5::Raid5Controller;
pub use raid6::Raid6Controller;

/// RaidLevel selects one of the supported layouts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RaidLevel {
    /// Striping, no redundancy.
    Raid0,
    /// Every member mirrors every chunk.
    Raid1,
    /// Striping across mirrored pairs.
    Raid10,
    /// Striping with one rotated parity shard.
    Raid5,
    /// Striping with two fixed parity shards.
    Raid6,
}

impl RaidLevel {
    pub const ALL: [Self; 5] = [
        Self::Raid0,
        Self::Raid1,
        Self::Raid10,
        Self::Raid5,
        Self::Raid6,
    ];
}

impl fmt::Display for RaidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Raid0 => "RAID0",
            Self::Raid1 => "RAID1",
            Self::Raid10 => "RAID10",
            Self::Raid5 => "RAID5",
            Self::Raid6 => "RAID6",
        };
        f.write_str(name)
    }
}

/// `build_controller` constructs the controller for `level`.
///
/// # Arguments
/// * `level` - The RAID level to simulate.
/// * `members` - Number of member disks.
/// * `stripe_size` - Chunk size in bytes on every member.
///
/// # Errors
/// Returns the level's construction error for an invalid member count or stripe size.
pub fn build_controller(
    level: RaidLevel,
    members: usize,
    stripe_size: usize,
) -> Result<Box<dyn RaidController>> {
    Ok(match level {
        RaidLevel::Raid0 => Box::new(Raid0Controller::new(members, stripe_size)?),
        RaidLevel::Raid1 => Box::new(Raid1Controller::new(members, stripe_size)?),
        RaidLevel::Raid10 => Box::new(Raid10Controller::new(members, stripe_size)?),
        RaidLevel::Raid5 => Box::new(Raid5Controller::new(members, stripe_size)?),
        RaidLevel::Raid6 => Box::new(Raid6Controller::new(members, stripe_size)?),
    })
}

pub(crate) fn check_stripe_size(stripe_size: usize) -> Result<()> {
    if stripe_size == 0 {
        return Err(RaidError::InvalidStripeSize);
    }
    Ok(())
}

pub(crate) fn check_members(
    level: RaidLevel,
    members: usize,
    ok: bool,
    requirement: &'static str,
) -> Result<()> {
    if !ok {
        return Err(RaidError::InvalidMemberCount {
            level,
            members,
            requirement,
        });
    }
    Ok(())
}

/// `write_window` validates a write request; `None` means there is nothing to write.
pub(crate) fn write_window(offset: u64, data: &[u8]) -> Result<Option<Span>> {
    let span = Span::new(offset, data.len())?;
    Ok((span.len > 0).then_some(span))
}

/// `read_window` bounds a read request by the logical extent `stored`.
///
/// Reads running past the extent are truncated with a warning; reads starting at
/// or past it fail.
pub(crate) fn read_window(
    level: RaidLevel,
    start: u64,
    length: usize,
    stored: usize,
) -> Result<Option<Span>> {
    let span = Span::new(start, length)?;
    if span.len == 0 {
        return Ok(None);
    }
    if stored == 0 {
        return Err(RaidError::NoDataWritten);
    }
    if span.start >= stored {
        return Err(RaidError::OffsetBeyondData { start, stored });
    }
    if span.end() > stored {
        let truncated = stored - span.start;
        warn!(
            %level,
            length,
            start,
            stored,
            truncated,
            "read request exceeds total data stored, truncating read length"
        );
        return Ok(Some(Span {
            start: span.start,
            len: truncated,
        }));
    }
    Ok(Some(span))
}
