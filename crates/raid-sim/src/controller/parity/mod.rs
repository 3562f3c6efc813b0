//! Parity-striping engine shared by RAID5 and RAID6.
//!
//! One stripe is one chunk row across every member. Its data shards form a single
//! logical buffer of `chunk_size * data_shards` bytes; the codec derives the parity
//! shards from it and the placement decides which members hold which shard.


use tracing::{debug, warn};

use crate::controller::RaidLevel;
use crate::error::Result;
use crate::layout::chunk::Chunk;
use crate::layout::codec::ShardCodec;
use crate::layout::geometry::{Segment, Span, parity_extent};
use crate::retention::array::Array;

/// ParityPlacement maps a stripe's codec shard order onto member indices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParityPlacement {
    /// Parity starts at member `stripe % members` and advances with every stripe.
    Rotating,
    /// Parity always lives on the last members.
    Trailing,
}

impl ParityPlacement {
    /// `shard_members` lists, in codec order, the member holding each shard of `stripe`.
    ///
    /// Data shards come first in ascending member order, parity shards last.
    ///
    /// # Arguments
    /// * `stripe` - Stripe (chunk row) index.
    /// * `members` - Number of members in the array.
    /// * `parity` - Number of parity shards per stripe.
    ///
    /// # Returns
    /// A permutation of `0..members`.
    #[must_use]
    pub fn shard_members(self, stripe: usize, members: usize, parity: usize) -> Vec<usize> {
        match self {
            Self::Trailing => (0..members).collect(),
            Self::Rotating => {
                let parity_members: Vec<usize> =
                    (0..parity).map(|j| (stripe + j) % members).collect();
                let mut order: Vec<usize> = (0..members)
                    .filter(|m| !parity_members.contains(m))
                    .collect();
                order.extend(parity_members);
                order
            }
        }
    }
}

#[derive(Debug)]
pub(crate) struct ParityStripes {
    array: Array,
    codec: Box<dyn ShardCodec>,
    placement: ParityPlacement,
    level: RaidLevel,
}

impl ParityStripes {
    pub fn new(
        array: Array,
        codec: Box<dyn ShardCodec>,
        placement: ParityPlacement,
        level: RaidLevel,
    ) -> Self {
        Self {
            array,
            codec,
            placement,
            level,
        }
    }

    pub fn array(&self) -> &Array {
        &self.array
    }

    pub fn array_mut(&mut self) -> &mut Array {
        &mut self.array
    }

    /// Logical data bytes held by one full stripe.
    pub fn bytes_per_stripe(&self) -> usize {
        self.array.chunk_size() * self.codec.data_shards()
    }

    pub fn stored_bytes(&self) -> usize {
        parity_extent(self.array.depth(), self.bytes_per_stripe())
    }

    fn shard_members(&self, stripe: usize) -> Vec<usize> {
        self.placement
            .shard_members(stripe, self.array.members(), self.codec.parity_shards())
    }

    /// Members holding the parity shards of `stripe`.
    pub fn parity_members(&self, stripe: usize) -> Vec<usize> {
        let mut order = self.shard_members(stripe);
        order.split_off(self.codec.data_shards())
    }

    /// Every member's chunk at `stripe`, copied into codec order.
    fn gather(&self, stripe: usize) -> Vec<Chunk> {
        self.shard_members(stripe)
            .into_iter()
            .map(|m| {
                let chunk = self.array.view(m, stripe);
                if !chunk.is_present() {
                    debug!(
                        level = %self.level,
                        disk = m,
                        stripe,
                        "disk considered failed for stripe"
                    );
                }
                chunk
            })
            .collect()
    }

    /// `load` gathers a stripe and reconstructs whatever shards are absent.
    fn load(&self, stripe: usize) -> Result<Vec<Chunk>> {
        let mut shards = self.gather(stripe);
        if let Err(err) = self.codec.reconstruct(&mut shards) {
            warn!(level = %self.level, stripe, %err, "stripe cannot be reconstructed");
            return Err(err);
        }
        Ok(shards)
    }

    fn logical(&self, shards: &[Chunk]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.bytes_per_stripe());
        for shard in &shards[..self.codec.data_shards()] {
            if let Some(bytes) = shard.as_bytes() {
                buf.extend_from_slice(bytes);
            }
        }
        buf
    }

    fn store(&mut self, stripe: usize, shards: Vec<Vec<u8>>) {
        for (m, shard) in self.shard_members(stripe).into_iter().zip(shards) {
            self.array.store(m, stripe, shard);
        }
    }

    fn read_modify_write(&self, seg: Segment, data: &[u8]) -> Result<Vec<Vec<u8>>> {
        debug!(
            level = %self.level,
            stripe = seg.index,
            offset = seg.offset,
            len = seg.len,
            "partial stripe write, performing read-modify-write"
        );
        let shards = self.load(seg.index)?;
        let mut buf = self.logical(&shards);
        buf[seg.unit_range()].copy_from_slice(&data[seg.buffer_range()]);
        self.codec.encode(&buf, self.array.chunk_size())
    }

    /// `write` encodes every stripe touched by `span` and stores all shards.
    ///
    /// Stripes covered in full are encoded straight from `data`; the others go through
    /// read-modify-write. Nothing is stored unless every stripe encodes.
    pub fn write(&mut self, span: Span, data: &[u8]) -> Result<()> {
        let unit = self.bytes_per_stripe();
        let chunk = self.array.chunk_size();

        let mut staged = Vec::new();
        for seg in span.segments(unit) {
            let shards = if seg.covers_unit(unit) {
                self.codec.encode(&data[seg.buffer_range()], chunk)?
            } else {
                self.read_modify_write(seg, data)?
            };
            staged.push((seg.index, shards));
        }

        for (stripe, shards) in staged {
            self.store(stripe, shards);
            debug!(level = %self.level, stripe, "stripe written");
        }
        Ok(())
    }

    pub fn read(&self, span: Span) -> Result<Vec<u8>> {
        let mut out = vec![0u8; span.len];
        for seg in span.segments(self.bytes_per_stripe()) {
            let shards = self.load(seg.index)?;
            let buf = self.logical(&shards);
            out[seg.buffer_range()].copy_from_slice(&buf[seg.unit_range()]);
        }
        Ok(out)
    }

    /// `rebuild_member` regenerates every lost chunk of member `m` from the other shards.
    pub fn rebuild_member(&mut self, m: usize) -> Result<usize> {
        let size = self.array.chunk_size();
        let mut rebuilt = 0;
        for stripe in 0..self.array.depth() {
            if !self.array.disk(m).is_lost(stripe, size) {
                continue;
            }
            let shards = self.load(stripe)?;
            let slot = self
                .shard_members(stripe)
                .iter()
                .position(|&member| member == m);
            if let Some(bytes) = slot.and_then(|s| shards[s].as_bytes()) {
                self.array.store(m, stripe, bytes.to_vec());
                rebuilt += 1;
            }
        }
        Ok(rebuilt)
    }
}
