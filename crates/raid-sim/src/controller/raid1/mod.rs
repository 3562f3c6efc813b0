//! RAID1: every member mirrors every chunk.

use crate::controller::striped::Striped;
use crate::controller::{RaidLevel, check_members, check_stripe_size};
use crate::error::Result;
use crate::retention::array::Array;

mod controller_impl;
#[cfg(test)]
mod raid1_tests;
mod restore_impl;
#[cfg(test)]
mod restore_trait_tests;

/// Raid1Controller keeps an identical copy of each chunk on all members.
#[derive(Clone, Debug)]
pub struct Raid1Controller {
    engine: Striped,
}

impl Raid1Controller {
    /// `new` creates an empty RAID1 array.
    ///
    /// # Arguments
    /// * `members` - Number of mirrors, at least two.
    /// * `stripe_size` - Chunk size in bytes on every member.
    ///
    /// # Errors
    /// Returns `InvalidMemberCount` or `InvalidStripeSize` for an unusable shape.
    pub fn new(members: usize, stripe_size: usize) -> Result<Self> {
        check_members(RaidLevel::Raid1, members, members >= 2, "at least 2 disks")?;
        check_stripe_size(stripe_size)?;
        Ok(Self {
            engine: Striped::new(
                Array::init_array(members, stripe_size),
                vec![(0..members).collect()],
            ),
        })
    }
}
