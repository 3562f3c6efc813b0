//! Retention layer primitives: member disks and the array that owns them.

pub mod array;
pub mod disk;
