//! Striped-mirror engine shared by RAID0, RAID1 and RAID10.
//!
//! Chunks are distributed round-robin over lanes; every member of a lane holds an
//! identical copy. RAID0 has one member per lane, RAID1 a single lane of all
//! members, RAID10 one lane per mirrored pair.

#[cfg(test)]
mod striped_tests;

use tracing::debug;

use crate::layout::chunk::Chunk;
use crate::layout::geometry::{Lane, Span, locate_lane, striped_extent};
use crate::retention::array::Array;

/// LostChunk names a chunk that no member of its lane can serve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct LostChunk {
    pub lane: usize,
    pub row: usize,
}

#[derive(Clone, Debug)]
pub(crate) struct Striped {
    array: Array,
    lanes: Vec<Vec<usize>>,
}

impl Striped {
    pub fn new(array: Array, lanes: Vec<Vec<usize>>) -> Self {
        Self { array, lanes }
    }

    pub fn array(&self) -> &Array {
        &self.array
    }

    pub fn array_mut(&mut self) -> &mut Array {
        &mut self.array
    }

    pub fn stored_bytes(&self) -> usize {
        let depths: Vec<usize> = self
            .lanes
            .iter()
            .map(|lane| self.array.depth_of(lane.iter().copied()))
            .collect();
        striped_extent(&depths, self.array.chunk_size())
    }

    fn locate(&self, index: usize) -> Lane {
        locate_lane(index, self.lanes.len())
    }

    /// First usable copy of `row` among the lane's members, skipping `except`.
    fn healthy_copy(&self, lane: usize, row: usize, except: Option<usize>) -> Option<&[u8]> {
        let size = self.array.chunk_size();
        self.lanes[lane]
            .iter()
            .filter(|&&m| Some(m) != except)
            .find_map(|&m| {
                self.array
                    .disk(m)
                    .chunk(row)
                    .filter(|bytes| bytes.len() == size)
            })
    }

    fn lane_lost(&self, lane: usize, row: usize) -> bool {
        let size = self.array.chunk_size();
        self.lanes[lane]
            .iter()
            .any(|&m| self.array.disk(m).is_lost(row, size))
    }

    /// `write` copies `data` into every member of each touched lane.
    ///
    /// A partial write into a chunk that no member can serve fails before anything
    /// is stored; a write covering the whole chunk replaces it.
    pub fn write(&mut self, span: Span, data: &[u8]) -> Result<(), LostChunk> {
        let size = self.array.chunk_size();
        for seg in span.segments(size) {
            let Lane { lane, row } = self.locate(seg.index);
            if !seg.covers_unit(size)
                && self.healthy_copy(lane, row, None).is_none()
                && self.lane_lost(lane, row)
            {
                return Err(LostChunk { lane, row });
            }
        }

        for seg in span.segments(size) {
            let Lane { lane, row } = self.locate(seg.index);
            // A member that lost this chunk is reseeded from its mirror first so the
            // bytes outside the segment stay identical across the lane.
            let seed = self.healthy_copy(lane, row, None).map(<[u8]>::to_vec);

            for i in 0..self.lanes[lane].len() {
                let m = self.lanes[lane][i];
                let slot = self.array.ensure_row(m, row);
                if !slot.is_usable(size) {
                    *slot = Chunk::Present(seed.clone().unwrap_or_else(|| vec![0u8; size]));
                }
                if let Some(bytes) = slot.as_bytes_mut() {
                    bytes[seg.unit_range()].copy_from_slice(&data[seg.buffer_range()]);
                }
            }
            debug!(lane, row, offset = seg.offset, len = seg.len, "chunk written");
        }
        Ok(())
    }

    pub fn read(&self, span: Span) -> Result<Vec<u8>, LostChunk> {
        let size = self.array.chunk_size();
        let mut out = vec![0u8; span.len];
        for seg in span.segments(size) {
            let Lane { lane, row } = self.locate(seg.index);
            match self.healthy_copy(lane, row, None) {
                Some(bytes) => out[seg.buffer_range()].copy_from_slice(&bytes[seg.unit_range()]),
                None if self.lane_lost(lane, row) => return Err(LostChunk { lane, row }),
                // Never written on any member: reads as zeros.
                None => {}
            }
        }
        Ok(out)
    }

    /// `rebuild_member` copies every lost chunk of member `m` from its mirrors.
    pub fn rebuild_member(&mut self, m: usize) -> Result<usize, LostChunk> {
        let size = self.array.chunk_size();
        let Some(lane) = self.lanes.iter().position(|l| l.contains(&m)) else {
            return Ok(0);
        };
        let depth = self.array.depth_of(self.lanes[lane].iter().copied());

        let mut rebuilt = 0;
        for row in 0..depth {
            if !self.array.disk(m).is_lost(row, size) {
                continue;
            }
            let Some(copy) = self.healthy_copy(lane, row, Some(m)).map(<[u8]>::to_vec) else {
                return Err(LostChunk { lane, row });
            };
            self.array.store(m, row, copy);
            rebuilt += 1;
        }
        Ok(rebuilt)
    }
}
