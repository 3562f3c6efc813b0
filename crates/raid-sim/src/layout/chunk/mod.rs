//! Chunk slots stored on member disks, with byte-level XOR helpers for parity.


#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
/// Chunk is one slot of a member disk: either a present block of bytes or a lost one.
pub enum Chunk {
    /// Healthy block; its length equals the array's stripe size.
    Present(Vec<u8>),
    /// Cleared, failed or never reconstructed.
    #[default]
    Absent,
}

impl Chunk {
    #[inline]
    #[must_use]
    /// `zeroed` returns a present, zero-filled chunk.
    ///
    /// # Arguments
    /// * `len` - The chunk length in bytes.
    pub fn zeroed(len: usize) -> Self {
        Self::Present(vec![0u8; len])
    }

    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[inline]
    #[must_use]
    /// `is_usable` reports whether the chunk is present and exactly `len` bytes long.
    ///
    /// Zero-length or wrongly sized blocks are treated as lost by every reader.
    pub fn is_usable(&self, len: usize) -> bool {
        matches!(self, Self::Present(bytes) if !bytes.is_empty() && bytes.len() == len)
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Present(bytes) => Some(bytes),
            Self::Absent => None,
        }
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        match self {
            Self::Present(bytes) => Some(bytes),
            Self::Absent => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Present(bytes) => Some(bytes),
            Self::Absent => None,
        }
    }
}

impl From<Option<Vec<u8>>> for Chunk {
    fn from(value: Option<Vec<u8>>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl From<Chunk> for Option<Vec<u8>> {
    fn from(value: Chunk) -> Self {
        value.into_bytes()
    }
}

#[inline]
/// `xor_in_place` XORs `src` into `dst` byte by byte.
///
/// # Arguments
/// * `dst` - The accumulator buffer.
/// * `src` - The buffer folded into the accumulator.
///
/// # Panics
/// Panics if the buffers differ in length.
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    assert_eq!(
        dst.len(),
        src.len(),
        "XOR operands must be {} bytes.",
        dst.len()
    );
    for (a, b) in dst.iter_mut().zip(src.iter()) {
        *a ^= *b;
    }
}

#[must_use]
/// `xor_all` folds every buffer into a fresh zeroed buffer of `len` bytes.
pub fn xor_all<'a, I>(len: usize, buffers: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut acc = vec![0u8; len];
    for buf in buffers {
        xor_in_place(&mut acc, buf);
    }
    acc
}
