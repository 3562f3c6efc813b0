use tracing::info;

use crate::controller::raid1::Raid1Controller;
use crate::controller::traits::restore::Restore;
use crate::error::{RaidError, Result};

impl Restore for Raid1Controller {
    fn rebuild_disk(&mut self, index: usize) -> Result<usize> {
        self.engine.array().check_index(index)?;
        let rebuilt = self
            .engine
            .rebuild_member(index)
            .map_err(|lost| RaidError::NoHealthyMirror { chunk: lost.row })?;
        info!(disk = index, chunks = rebuilt, "RAID1 disk rebuilt from mirrors");
        Ok(rebuilt)
    }
}
