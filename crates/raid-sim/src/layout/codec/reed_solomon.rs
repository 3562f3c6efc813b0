use std::fmt;

use reed_solomon_erasure::galois_8::ReedSolomon;

use crate::error::{RaidError, Result};
use crate::layout::chunk::Chunk;
use crate::layout::codec::ShardCodec;

/// ReedSolomonCodec is a systematic GF(2^8) Reed-Solomon codec tolerating
/// `parity_shards` simultaneous losses.
pub struct ReedSolomonCodec {
    rs: ReedSolomon,
    data_shards: usize,
    parity_shards: usize,
}

impl fmt::Debug for ReedSolomonCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReedSolomonCodec")
            .field("data_shards", &self.data_shards)
            .field("parity_shards", &self.parity_shards)
            .finish()
    }
}

impl ReedSolomonCodec {
    /// # Arguments
    /// * `data_shards` - Number of data shards (k).
    /// * `parity_shards` - Number of parity shards (m).
    ///
    /// # Errors
    /// Returns `Codec` if the library rejects the k+m shape (zero counts, more than 256 shards).
    pub fn new(data_shards: usize, parity_shards: usize) -> Result<Self> {
        let rs = ReedSolomon::new(data_shards, parity_shards).map_err(|e| {
            RaidError::Codec(format!(
                "failed to create Reed-Solomon codec {data_shards}+{parity_shards}: {e}"
            ))
        })?;
        Ok(Self {
            rs,
            data_shards,
            parity_shards,
        })
    }
}

impl ShardCodec for ReedSolomonCodec {
    fn data_shards(&self) -> usize {
        self.data_shards
    }

    fn parity_shards(&self) -> usize {
        self.parity_shards
    }

    fn compute_parity(&self, shards: &mut [Vec<u8>]) -> Result<()> {
        self.rs
            .encode(shards)
            .map_err(|e| RaidError::Codec(format!("failed to encode shards: {e}")))
    }

    fn recover(&self, shards: &mut [Chunk]) -> Result<()> {
        let mut slots: Vec<Option<Vec<u8>>> = shards
            .iter_mut()
            .map(|s| std::mem::take(s).into_bytes())
            .collect();
        let outcome = self.rs.reconstruct(&mut slots);

        for (shard, slot) in shards.iter_mut().zip(slots) {
            *shard = Chunk::from(slot);
        }
        outcome.map_err(|e| RaidError::Codec(format!("failed to reconstruct shards: {e}")))
    }
}
