use tracing::info;

use crate::controller::raid5::Raid5Controller;
use crate::controller::traits::restore::Restore;
use crate::error::Result;

impl Restore for Raid5Controller {
    fn rebuild_disk(&mut self, index: usize) -> Result<usize> {
        self.engine.array().check_index(index)?;
        let rebuilt = self.engine.rebuild_member(index)?;
        info!(disk = index, chunks = rebuilt, "RAID5 disk rebuilt from parity");
        Ok(rebuilt)
    }
}
