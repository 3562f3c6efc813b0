use crate::controller::raid0::Raid0Controller;
use crate::controller::traits::controller::RaidController;
use crate::controller::{RaidLevel, read_window, write_window};
use crate::error::{RaidError, Result};
use crate::retention::disk::Disk;

impl RaidController for Raid0Controller {
    fn level(&self) -> RaidLevel {
        RaidLevel::Raid0
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
            Some(span) => self
                .engine
                .write(span, data)
                .map_err(|lost| RaidError::ChunkUnavailable {
                    disk: lost.lane,
                    chunk: lost.row,
                }),
            None => Ok(()),
        }
    }

    fn read(&self, start: u64, length: usize) -> Result<Vec<u8>> {
        let Some(span) = read_window(self.level(), start, length, self.stored_bytes())? else {
            return Ok(Vec::new());
        };
        self.engine.read(span).map_err(|lost| RaidError::ChunkUnavailable {
            disk: lost.lane,
            chunk: lost.row,
        })
    }

    fn clear_disk(&mut self, index: usize) -> Result<()> {
        self.engine.array_mut().fail_disk(index)
    }

    fn status_string(&self) -> String {
        self.engine.array().status_string()
    }
}
