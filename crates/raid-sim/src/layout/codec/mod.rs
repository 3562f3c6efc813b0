//! Shard codecs: split one logical stripe into data shards, derive parity shards,
//! and rebuild lost shards from the survivors.
//!
//! Shards are always ordered data first, then parity. Controllers map that order
//! onto physical members through their parity placement.

#[cfg(test)]
mod codec_tests;
mod reed_solomon;
mod xor;

use std::fmt;

use tracing::debug;

use crate::error::{RaidError, Result};
use crate::layout::chunk::Chunk;

pub use reed_solomon::ReedSolomonCodec;
pub use xor::XorCodec;

/// ShardCodec is the erasure-coding collaborator injected into parity controllers.
pub trait ShardCodec: fmt::Debug {
    /// Number of data shards per stripe.
    fn data_shards(&self) -> usize;
    /// Number of parity shards per stripe, which is also the number of losses tolerated.
    fn parity_shards(&self) -> usize;

    fn total_shards(&self) -> usize {
        self.data_shards() + self.parity_shards()
    }

    /// compute_parity fills the parity shards of a full shard set in place.
    ///
    /// # Arguments
    /// * `shards` - `total_shards()` equally sized buffers; data shards hold the payload.
    ///
    /// # Errors
    /// Returns an error if the backing algorithm rejects the shard set.
    fn compute_parity(&self, shards: &mut [Vec<u8>]) -> Result<()>;

    /// recover rebuilds absent shards. Callers guarantee between one and
    /// `parity_shards()` shards are absent and the rest are equally sized.
    ///
    /// # Errors
    /// Returns an error if the backing algorithm cannot rebuild the set.
    fn recover(&self, shards: &mut [Chunk]) -> Result<()>;

    /// encode splits a logical stripe buffer into shards and appends parity.
    ///
    /// The final data shard is zero-padded when `buf` is shorter than a full stripe.
    ///
    /// # Arguments
    /// * `buf` - Logical stripe bytes, at most `data_shards() * shard_size` long.
    /// * `shard_size` - Size in bytes of each shard.
    ///
    /// # Errors
    /// Returns `ShardMismatch` if the buffer does not fit the stripe or `shard_size`
    /// is zero, or any error raised by [`ShardCodec::compute_parity`].
    fn encode(&self, buf: &[u8], shard_size: usize) -> Result<Vec<Vec<u8>>> {
        if shard_size == 0 {
            return Err(RaidError::ShardMismatch("shard size is zero".to_string()));
        }
        let capacity = self.data_shards() * shard_size;
        if buf.len() > capacity {
            return Err(RaidError::ShardMismatch(format!(
                "stripe buffer of {} bytes exceeds {capacity} bytes of data shards",
                buf.len()
            )));
        }

        let mut shards = vec![vec![0u8; shard_size]; self.total_shards()];
        for (shard, src) in shards.iter_mut().zip(buf.chunks(shard_size)) {
            shard[..src.len()].copy_from_slice(src);
        }
        self.compute_parity(&mut shards)?;
        Ok(shards)
    }

    /// reconstruct fills in up to `parity_shards()` absent shards.
    ///
    /// A no-op when nothing is absent, so calling it on a complete set is idempotent.
    ///
    /// # Errors
    /// Returns `TooManyMissingShards` when more shards are absent than parity allows,
    /// and `ShardMismatch` when the set has the wrong count or mixed shard sizes.
    fn reconstruct(&self, shards: &mut [Chunk]) -> Result<()> {
        if shards.len() != self.total_shards() {
            return Err(RaidError::ShardMismatch(format!(
                "expected {} shards, got {}",
                self.total_shards(),
                shards.len()
            )));
        }

        let mut sizes = shards.iter().filter_map(Chunk::as_bytes).map(<[u8]>::len);
        if let Some(first) = sizes.next() {
            if sizes.any(|len| len != first) {
                return Err(RaidError::ShardMismatch(
                    "present shards differ in size".to_string(),
                ));
            }
        }

        let missing = shards.iter().filter(|s| !s.is_present()).count();
        if missing == 0 {
            return Ok(());
        }
        if missing > self.parity_shards() {
            return Err(RaidError::TooManyMissingShards {
                missing,
                parity: self.parity_shards(),
            });
        }

        debug!(missing, parity = self.parity_shards(), "reconstructing shards");
        self.recover(shards)
    }
}
