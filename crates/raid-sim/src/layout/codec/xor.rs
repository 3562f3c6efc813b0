use crate::error::{RaidError, Result};
use crate::layout::chunk::{Chunk, xor_all};
use crate::layout::codec::ShardCodec;

/// XorCodec computes a single parity shard as the XOR of all data shards.
#[derive(Clone, Debug)]
pub struct XorCodec {
    data_shards: usize,
}

impl XorCodec {
    /// # Errors
    /// Returns `ShardMismatch` if `data_shards` is zero.
    pub fn new(data_shards: usize) -> Result<Self> {
        if data_shards == 0 {
            return Err(RaidError::ShardMismatch(
                "XOR parity needs at least one data shard".to_string(),
            ));
        }
        Ok(Self { data_shards })
    }
}

impl ShardCodec for XorCodec {
    fn data_shards(&self) -> usize {
        self.data_shards
    }

    fn parity_shards(&self) -> usize {
        1
    }

    fn compute_parity(&self, shards: &mut [Vec<u8>]) -> Result<()> {
        if shards.len() != self.total_shards() {
            return Err(RaidError::ShardMismatch(format!(
                "expected {} shards, got {}",
                self.total_shards(),
                shards.len()
            )));
        }
        let (data, parity) = shards.split_at_mut(self.data_shards);
        let len = parity[0].len();
        if data.iter().any(|s| s.len() != len) {
            return Err(RaidError::ShardMismatch(
                "data shards differ in size".to_string(),
            ));
        }
        parity[0] = xor_all(len, data.iter().map(Vec::as_slice));
        Ok(())
    }

    fn recover(&self, shards: &mut [Chunk]) -> Result<()> {
        let Some(lost) = shards.iter().position(|s| !s.is_present()) else {
            return Ok(());
        };
        let len = shards
            .iter()
            .find_map(Chunk::as_bytes)
            .map_or(0, <[u8]>::len);
        // XOR of every survivor, parity included, equals the lost shard.
        let rebuilt = xor_all(len, shards.iter().filter_map(Chunk::as_bytes));
        shards[lost] = Chunk::Present(rebuilt);
        Ok(())
    }
}
