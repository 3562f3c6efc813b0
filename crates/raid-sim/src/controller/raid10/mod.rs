//! RAID10: striping across mirrored pairs.

use crate::controller::striped::Striped;
use crate::controller::{RaidLevel, check_members, check_stripe_size};
use crate::error::{RaidError, Result};
use crate::retention::array::Array;

mod controller_impl;
mod restore_impl;

/// Raid10Controller groups consecutive members into pairs and stripes over the pairs.
#[derive(Clone, Debug)]
pub struct Raid10Controller {
    engine: Striped,
}

impl Raid10Controller {
    /// `new` creates an empty RAID10 array of `members / 2` mirrored pairs.
    ///
    /// # Errors
    /// Returns `InvalidMemberCount` unless `members` is even and at least four, and
    /// `InvalidStripeSize` for a zero stripe size.
    pub fn new(members: usize, stripe_size: usize) -> Result<Self> {
        check_members(
            RaidLevel::Raid10,
            members,
            members >= 4 && members % 2 == 0,
            "an even number of disks, at least 4",
        )?;
        check_stripe_size(stripe_size)?;
        let pairs = (0..members / 2).map(|p| vec![2 * p, 2 * p + 1]).collect();
        Ok(Self {
            engine: Striped::new(Array::init_array(members, stripe_size), pairs),
        })
    }

    #[must_use]
    pub fn pairs(&self) -> usize {
        self.engine.array().members() / 2
    }

    /// Member index of the disk with ID `id`.
    fn member_of(&self, id: usize) -> Result<usize> {
        self.engine
            .array()
            .position_of(id)
            .ok_or(RaidError::DiskNotFound(id))
    }
}
