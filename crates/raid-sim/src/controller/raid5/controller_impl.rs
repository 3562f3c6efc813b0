use crate::controller::raid5::Raid5Controller;
use crate::controller::traits::controller::RaidController;
use crate::controller::traits::restore::Restore;
use crate::controller::{RaidLevel, read_window, write_window};
use crate::error::Result;
use crate::retention::disk::Disk;

impl RaidController for Raid5Controller {
    fn level(&self) -> RaidLevel {
        RaidLevel::Raid5
    }

    fn stripe_size(&self) -> usize {
        self.engine.array().chunk_size()
    }

    fn disks(&self) -> &[Disk] {
        self.engine.array().disks()
    }

    fn stored_bytes(&self) -> usize {
        self.engine.stored_bytes()
    }

    fn write(&mut self, data: &[u8], offset: u64) -> Result<()> {
        match write_window(offset, data)? {
            Some(span) => self.engine.write(span, data),
            None => Ok(()),
        }
    }

    fn read(&self, start: u64, length: usize) -> Result<Vec<u8>> {
        match read_window(self.level(), start, length, self.stored_bytes())? {
            Some(span) => self.engine.read(span),
            None => Ok(Vec::new()),
        }
    }

    fn clear_disk(&mut self, index: usize) -> Result<()> {
        self.engine.array_mut().fail_disk(index)
    }

    fn status_string(&self) -> String {
        self.engine.array().status_string()
    }

    fn as_restore_mut(&mut self) -> Option<&mut dyn Restore> {
        Some(self)
    }
}
