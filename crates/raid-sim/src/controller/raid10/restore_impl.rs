use tracing::info;

use crate::controller::raid10::Raid10Controller;
use crate::controller::traits::restore::Restore;
use crate::error::{RaidError, Result};

impl Restore for Raid10Controller {
    fn rebuild_disk(&mut self, index: usize) -> Result<usize> {
        let member = self.member_of(index)?;
        let rebuilt = self
            .engine
            .rebuild_member(member)
            .map_err(|lost| RaidError::MirrorPairLost {
                pair: lost.lane,
                chunk: lost.row,
            })?;
        info!(
            disk = index,
            pair = member / 2,
            chunks = rebuilt,
            "RAID10 disk rebuilt from its pair"
        );
        Ok(rebuilt)
    }
}
