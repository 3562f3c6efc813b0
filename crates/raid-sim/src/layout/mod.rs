//! Chunk slots, address translation and shard codecs shared by every RAID level.

pub mod chunk;
pub mod codec;
pub mod geometry;
