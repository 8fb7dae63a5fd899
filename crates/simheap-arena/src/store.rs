//! Growable backing storage with bump placement.
//!
//! [`ValueStore`] is the simulated heap itself: a single `Vec<T>` that
//! only ever grows. Each allocation is placed at the current end of the
//! vec and keeps its offset forever — released regions are never
//! compacted or handed out again, so a stale offset can never silently
//! resolve to someone else's data.

/// Bump storage over a growable `Vec<T>`.
pub(crate) struct ValueStore<T> {
    /// Backing storage. Grows on demand, never shrinks.
    data: Vec<T>,
}

impl<T: Copy + Default> ValueStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Place `len` default-initialised elements at the end of the store.
    ///
    /// Returns the offset of the first element.
    pub fn alloc(&mut self, len: usize) -> usize {
        let offset = self.data.len();
        self.data.resize(offset + len, T::default());
        offset
    }

    /// Shared view of a placed region.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the placed region; the arena
    /// only passes offsets from its own slot table, so this indicates
    /// internal corruption rather than caller misuse.
    pub fn slice(&self, offset: usize, len: usize) -> &[T] {
        &self.data[offset..offset + len]
    }

    /// Mutable view of a placed region.
    ///
    /// # Panics
    ///
    /// Same contract as [`ValueStore::slice`].
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [T] {
        &mut self.data[offset..offset + len]
    }

    /// Total elements ever placed.
    pub fn used(&self) -> usize {
        self.data.len()
    }

    /// Memory footprint of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_returns_sequential_offsets() {
        let mut store: ValueStore<i64> = ValueStore::new();
        assert_eq!(store.alloc(3), 0);
        assert_eq!(store.alloc(2), 3);
        assert_eq!(store.used(), 5);
    }

    #[test]
    fn alloc_default_initialises() {
        let mut store: ValueStore<i64> = ValueStore::new();
        let off = store.alloc(4);
        assert!(store.slice(off, 4).iter().all(|&v| v == 0));
    }

    #[test]
    fn regions_do_not_overlap() {
        let mut store: ValueStore<i64> = ValueStore::new();
        let a = store.alloc(3);
        let b = store.alloc(3);
        store.slice_mut(a, 3).fill(1);
        store.slice_mut(b, 3).fill(2);
        assert!(store.slice(a, 3).iter().all(|&v| v == 1));
        assert!(store.slice(b, 3).iter().all(|&v| v == 2));
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut store: ValueStore<char> = ValueStore::new();
        let off = store.alloc(1);
        store.slice_mut(off, 1)[0] = 'F';
        assert_eq!(store.slice(off, 1)[0], 'F');
    }

    #[test]
    fn memory_bytes_tracks_element_size() {
        let mut store: ValueStore<i64> = ValueStore::new();
        store.alloc(10);
        assert_eq!(store.memory_bytes(), 10 * 8);
    }
}
