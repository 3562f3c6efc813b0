//! RAID5: striping with a single rotated parity shard.

use crate::controller::parity::{ParityPlacement, ParityStripes};
use crate::controller::{RaidLevel, check_members, check_stripe_size};
use crate::error::{RaidError, Result};
use crate::layout::codec::{ShardCodec, XorCodec};
use crate::retention::array::Array;

mod controller_impl;
mod restore_impl;

/// Raid5Controller stores `members - 1` data shards and one parity shard per stripe.
///
/// The parity member of stripe `s` is `s % members`; data shards fill the remaining
/// members in ascending order.
#[derive(Debug)]
pub struct Raid5Controller {
    engine: ParityStripes,
}

impl Raid5Controller {
    /// `new` creates an empty RAID5 array with XOR parity.
    ///
    /// # Arguments
    /// * `members` - Number of member disks, at least three.
    /// * `stripe_size` - Chunk size in bytes on every member.
    ///
    /// # Errors
    /// Returns `InvalidMemberCount` or `InvalidStripeSize` for an unusable shape.
    pub fn new(members: usize, stripe_size: usize) -> Result<Self> {
        check_members(RaidLevel::Raid5, members, members >= 3, "at least 3 disks")?;
        let codec = XorCodec::new(members - 1)?;
        Self::with_codec(members, stripe_size, Box::new(codec))
    }

    /// `with_codec` creates an empty RAID5 array around a caller-supplied codec.
    ///
    /// # Arguments
    /// * `members` - Number of member disks, at least three.
    /// * `stripe_size` - Chunk size in bytes on every member.
    /// * `codec` - Any codec with one parity shard and `members - 1` data shards.
    ///
    /// # Errors
    /// Returns `InvalidMemberCount` or `InvalidStripeSize` for an unusable shape, and
    /// `ShardMismatch` when the codec's shape does not match the array.
    pub fn with_codec(
        members: usize,
        stripe_size: usize,
        codec: Box<dyn ShardCodec>,
    ) -> Result<Self> {
        check_members(RaidLevel::Raid5, members, members >= 3, "at least 3 disks")?;
        check_stripe_size(stripe_size)?;
        if codec.parity_shards() != 1 || codec.data_shards() != members - 1 {
            return Err(RaidError::ShardMismatch(format!(
                "RAID5 over {members} disks needs a {}+1 codec, got {}+{}",
                members - 1,
                codec.data_shards(),
                codec.parity_shards()
            )));
        }
        Ok(Self {
            engine: ParityStripes::new(
                Array::init_array(members, stripe_size),
                codec,
                ParityPlacement::Rotating,
                RaidLevel::Raid5,
            ),
        })
    }

    /// Logical data bytes per stripe.
    #[must_use]
    pub fn bytes_per_stripe(&self) -> usize {
        self.engine.bytes_per_stripe()
    }

    /// Member holding the parity shard of `stripe`.
    #[must_use]
    pub fn parity_member(&self, stripe: usize) -> usize {
        self.engine.parity_members(stripe)[0]
    }
}
