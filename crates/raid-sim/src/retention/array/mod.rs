
use std::fmt::Write;

use tracing::info;

use crate::error::{RaidError, Result};
use crate::layout::chunk::Chunk;
use crate::retention::disk::Disk;

/// Array owns the ordered member disks and the chunk size shared by all of them.
#[derive(Clone, Debug)]
pub struct Array {
    disks: Vec<Disk>,
    chunk_size: usize,
}

impl Array {
    /// `init_array` creates `members` empty disks with IDs equal to their index.
    #[must_use]
    pub fn init_array(members: usize, chunk_size: usize) -> Self {
        Self {
            disks: (0..members).map(Disk::new).collect(),
            chunk_size,
        }
    }

    #[must_use]
    pub fn members(&self) -> usize {
        self.disks.len()
    }

    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    #[must_use]
    pub(crate) fn disk(&self, i: usize) -> &Disk {
        &self.disks[i]
    }

    /// # Errors
    /// Returns `IndexOutOfRange` if `i` is not a member index.
    pub fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.disks.len() {
            return Err(RaidError::IndexOutOfRange {
                index: i,
                disks: self.disks.len(),
            });
        }
        Ok(())
    }

    /// `position_of` finds the member index of the disk with the given ID.
    #[must_use]
    pub fn position_of(&self, id: usize) -> Option<usize> {
        self.disks.iter().position(|d| d.id() == id)
    }

    /// `fail_disk` discards every chunk held by member `i`.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `i` is not a member index.
    pub fn fail_disk(&mut self, i: usize) -> Result<()> {
        self.check_index(i)?;
        self.disks[i].clear();
        info!(disk = i, "disk has been cleared (simulating failure)");
        Ok(())
    }

    /// Deepest high-water mark among the given members.
    #[must_use]
    pub(crate) fn depth_of<I>(&self, members: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        members
            .into_iter()
            .map(|m| self.disks[m].high_water())
            .max()
            .unwrap_or(0)
    }

    /// Deepest high-water mark across the whole array.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth_of(0..self.disks.len())
    }

    /// `view` returns member `m`'s slot at `row` as a reader sees it.
    #[must_use]
    pub(crate) fn view(&self, m: usize, row: usize) -> Chunk {
        self.disks[m].view(row, self.chunk_size)
    }

    /// `ensure_row` grows member `m` so that `row` exists and returns the slot.
    pub(crate) fn ensure_row(&mut self, m: usize, row: usize) -> &mut Chunk {
        let size = self.chunk_size;
        self.disks[m].ensure_row(row, size)
    }

    /// `store` overwrites member `m`'s slot at `row` with one full chunk.
    ///
    /// # Panics
    /// Panics in debug builds if `bytes` is not exactly one chunk long.
    pub(crate) fn store(&mut self, m: usize, row: usize, bytes: Vec<u8>) {
        debug_assert_eq!(
            bytes.len(),
            self.chunk_size,
            "stored chunks must be {} bytes.",
            self.chunk_size
        );
        self.disks[m].store(row, bytes);
    }

    #[must_use]
    pub fn status_string(&self) -> String {
        let mut out = String::new();
        for (i, d) in self.disks.iter().enumerate() {
            let lost = d.lost_rows(self.chunk_size);
            let state = if d.high_water() == 0 {
                "EMPTY"
            } else if d.is_missing() {
                "FAILED"
            } else if lost > 0 {
                "DEGRADED"
            } else {
                "OK"
            };
            let _ = writeln!(
                out,
                "disk {i}: {state} (id={}, chunks={}, lost={lost})",
                d.id(),
                d.len()
            );
        }
        out
    }
}
