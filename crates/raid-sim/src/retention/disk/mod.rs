
use crate::layout::chunk::Chunk;

/// Disk is one simulated array member: an ordered list of chunk slots.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Disk {
    id: usize,
    chunks: Vec<Chunk>,
    /// Deepest chunk count this disk has ever held. Survives [`Disk::clear`].
    high_water: usize,
}

impl Disk {
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            chunks: Vec::new(),
            high_water: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Number of chunk slots currently held, lost ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[must_use]
    pub const fn high_water(&self) -> usize {
        self.high_water
    }

    /// `chunk` returns the bytes at `row` if that slot is present.
    #[must_use]
    pub fn chunk(&self, row: usize) -> Option<&[u8]> {
        self.chunks.get(row).and_then(Chunk::as_bytes)
    }

    /// `is_lost` reports whether `row` once held data that is no longer available.
    #[must_use]
    pub fn is_lost(&self, row: usize, size: usize) -> bool {
        row < self.high_water && !self.chunks.get(row).is_some_and(|c| c.is_usable(size))
    }

    /// `view` returns a copy of the slot at `row` as a reader sees it.
    ///
    /// Usable chunks are returned as-is, rows past the high-water mark read as fresh
    /// zero-filled space, and everything else is [`Chunk::Absent`].
    ///
    /// # Arguments
    /// * `row` - The chunk index.
    /// * `size` - The array's chunk size in bytes.
    #[must_use]
    pub fn view(&self, row: usize, size: usize) -> Chunk {
        match self.chunks.get(row) {
            Some(chunk) if chunk.is_usable(size) => chunk.clone(),
            _ if row >= self.high_water => Chunk::zeroed(size),
            _ => Chunk::Absent,
        }
    }

    /// `ensure_row` grows the chunk list so that `row` exists and returns that slot.
    ///
    /// Gap slots below the high-water mark become [`Chunk::Absent`] since their
    /// history was lost; slots at or above it become zero-filled.
    pub fn ensure_row(&mut self, row: usize, size: usize) -> &mut Chunk {
        while self.chunks.len() <= row {
            let next = self.chunks.len();
            let slot = if next < self.high_water {
                Chunk::Absent
            } else {
                Chunk::zeroed(size)
            };
            self.chunks.push(slot);
        }
        self.high_water = self.high_water.max(self.chunks.len());
        &mut self.chunks[row]
    }

    /// `store` overwrites the slot at `row` with a present chunk.
    pub fn store(&mut self, row: usize, bytes: Vec<u8>) {
        let size = bytes.len();
        *self.ensure_row(row, size) = Chunk::Present(bytes);
    }

    /// `clear` drops every chunk, simulating total loss of the member.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Rows below the high-water mark that are currently lost.
    #[must_use]
    pub fn lost_rows(&self, size: usize) -> usize {
        (0..self.high_water)
            .filter(|&row| self.is_lost(row, size))
            .count()
    }

    /// Missing from the array's point of view: once held data, holds none now.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.high_water > 0 && !self.chunks.iter().any(Chunk::is_present)
    }
}
