//! Geometry helpers for mapping logical byte offsets to stripes, lanes and rows.
//!
//! Every controller translates addresses through this module so that `write` and
//! `read` agree on the layout byte for byte.


use crate::error::{RaidError, Result};

/// Span is a validated logical byte range `[start, start + len)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    /// `new` validates that the range fits the in-memory address space.
    ///
    /// # Arguments
    /// * `start` - Starting logical byte offset.
    /// * `len` - Length of the range in bytes.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the start or end offset is not addressable.
    pub fn new(start: u64, len: usize) -> Result<Self> {
        let start = usize::try_from(start)
            .map_err(|_| RaidError::InvalidArgument(format!("offset {start} is not addressable")))?;
        start.checked_add(len).ok_or_else(|| {
            RaidError::InvalidArgument(format!("range {start}+{len} overflows the address space"))
        })?;
        Ok(Self { start, len })
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    #[must_use]
    /// `segments` splits the span at every multiple of `unit` bytes.
    ///
    /// # Arguments
    /// * `unit` - Size in bytes of one addressing unit (a chunk or a full stripe).
    ///
    /// # Panics
    /// Panics if `unit` is zero.
    pub fn segments(&self, unit: usize) -> Segments {
        assert!(unit > 0, "segment unit must be non-zero");
        Segments {
            pos: self.start,
            end: self.end(),
            base: self.start,
            unit,
        }
    }
}

/// Segment is the part of a span that falls inside one addressing unit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    /// Absolute index of the unit.
    pub index: usize,
    /// Byte offset of the segment inside the unit.
    pub offset: usize,
    /// Number of bytes covered.
    pub len: usize,
    /// Byte offset of the segment inside the caller's buffer.
    pub cursor: usize,
}

impl Segment {
    #[must_use]
    /// `covers_unit` reports whether the segment spans the whole unit.
    pub const fn covers_unit(&self, unit: usize) -> bool {
        self.offset == 0 && self.len == unit
    }

    #[must_use]
    pub const fn buffer_range(&self) -> std::ops::Range<usize> {
        self.cursor..self.cursor + self.len
    }

    #[must_use]
    pub const fn unit_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Iterator over the [`Segment`]s of a span.
#[derive(Clone, Debug)]
pub struct Segments {
    pos: usize,
    end: usize,
    base: usize,
    unit: usize,
}

impl Iterator for Segments {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let (index, offset) = locate_byte(self.pos, self.unit);
        let len = (self.unit - offset).min(self.end - self.pos);
        let segment = Segment {
            index,
            offset,
            len,
            cursor: self.pos - self.base,
        };
        self.pos += len;
        Some(segment)
    }
}

#[must_use]
/// `locate_byte` maps a logical byte offset to its unit index and in-unit offset.
///
/// # Returns
/// A tuple of `(unit_index, in_unit_offset)`.
pub const fn locate_byte(offset: usize, unit: usize) -> (usize, usize) {
    (offset / unit, offset % unit)
}

/// Lane addresses one chunk of a striped (RAID0/1/10) layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Lane {
    /// Which lane (member, mirror set or mirror pair) holds the chunk.
    pub lane: usize,
    /// Chunk index on the lane's members.
    pub row: usize,
}

#[must_use]
/// `locate_lane` distributes absolute chunk indices round-robin over `lanes`.
pub const fn locate_lane(unit_index: usize, lanes: usize) -> Lane {
    Lane {
        lane: unit_index % lanes,
        row: unit_index / lanes,
    }
}

#[must_use]
/// `striped_extent` returns the logical byte length covered by a striped layout.
///
/// # Arguments
/// * `depths` - Deepest chunk count per lane, in lane order.
/// * `chunk` - Chunk size in bytes.
pub fn striped_extent(depths: &[usize], chunk: usize) -> usize {
    let lanes = depths.len();
    depths
        .iter()
        .enumerate()
        .filter(|(_, depth)| **depth > 0)
        .map(|(lane, depth)| ((depth - 1) * lanes + lane + 1) * chunk)
        .max()
        .unwrap_or(0)
}

#[must_use]
/// `parity_extent` returns the logical byte length covered by `depth` full stripes.
pub const fn parity_extent(depth: usize, bytes_per_stripe: usize) -> usize {
    depth * bytes_per_stripe
}
