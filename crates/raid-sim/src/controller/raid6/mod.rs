//! RAID6: striping with two fixed Reed-Solomon parity shards.

use crate::controller::parity::{ParityPlacement, ParityStripes};
use crate::controller::{RaidLevel, check_members, check_stripe_size};
use crate::error::Result;
use crate::layout::codec::ReedSolomonCodec;
use crate::retention::array::Array;

mod controller_impl;
mod restore_impl;

/// Raid6Controller stores `members - 2` data shards per stripe; the last two members
/// always hold parity.
#[derive(Debug)]
pub struct Raid6Controller {
    engine: ParityStripes,
}

impl Raid6Controller {
    /// `new` creates an empty RAID6 array.
    ///
    /// # Arguments
    /// * `members` - Number of member disks, at least four.
    /// * `stripe_size` - Chunk size in bytes on every member.
    ///
    /// # Errors
    /// Returns `InvalidMemberCount` or `InvalidStripeSize` for an unusable shape, and
    /// `Codec` if the erasure library rejects the shard counts.
    pub fn new(members: usize, stripe_size: usize) -> Result<Self> {
        check_members(RaidLevel::Raid6, members, members >= 4, "at least 4 disks")?;
        check_stripe_size(stripe_size)?;
        let codec = ReedSolomonCodec::new(members - 2, 2)?;
        Ok(Self {
            engine: ParityStripes::new(
                Array::init_array(members, stripe_size),
                Box::new(codec),
                ParityPlacement::Trailing,
                RaidLevel::Raid6,
            ),
        })
    }

    #[must_use]
    pub fn bytes_per_stripe(&self) -> usize {
        self.engine.bytes_per_stripe()
    }

    /// The two members holding parity, identical for every stripe.
    #[must_use]
    pub fn parity_members(&self) -> Vec<usize> {
        self.engine.parity_members(0)
    }
}
