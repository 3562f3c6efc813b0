//! RAID0: striping with no redundancy.

use crate::controller::striped::Striped;
use crate::controller::{RaidLevel, check_members, check_stripe_size};
use crate::error::Result;
use crate::retention::array::Array;

mod controller_impl;

/// Raid0Controller stripes chunks round-robin over every member.
#[derive(Clone, Debug)]
pub struct Raid0Controller {
    engine: Striped,
}

impl Raid0Controller {
    /// `new` creates an empty RAID0 array.
    ///
    /// # Arguments
    /// * `members` - Number of member disks, at least one.
    /// * `stripe_size` - Chunk size in bytes on every member.
    ///
    /// # Errors
    /// Returns `InvalidMemberCount` or `InvalidStripeSize` for an unusable shape.
    pub fn new(members: usize, stripe_size: usize) -> Result<Self> {
        check_members(RaidLevel::Raid0, members, members >= 1, "at least 1 disk")?;
        check_stripe_size(stripe_size)?;
        let lanes = (0..members).map(|m| vec![m]).collect();
        Ok(Self {
            engine: Striped::new(Array::init_array(members, stripe_size), lanes),
        })
    }
}
