//! Restoration hooks for rebuilding cleared members.

/// Restore rebuilds a member's lost chunks from the surviving redundancy.
pub trait Restore {
    /// rebuild_disk rewrites every lost chunk of the member at the provided index.
    ///
    /// # Arguments
    /// * `index` - The disk index to rebuild.
    ///
    /// # Returns
    /// The number of chunks rewritten.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` for an invalid index, or the level's
    /// redundancy-exhausted error when a chunk cannot be recovered.
    fn rebuild_disk(&mut self, index: usize) -> crate::error::Result<usize>;
}
