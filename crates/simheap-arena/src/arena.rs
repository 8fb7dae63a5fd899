//! The manual allocation arena orchestrator.
//!
//! [`ManualArena`] owns the backing [`store`](crate::store) and the slot
//! table, and enforces the per-allocation lifecycle
//! `Unallocated → Valid → Released`. Every operation resolves the handle
//! through the slot table first, so a stale handle copy is recognised
//! and refused rather than resolving to freed storage.

use indexmap::IndexMap;

use simheap_core::{AllocError, AllocId};

use crate::handle::{Handle, HandleState};
use crate::iter::ValueIter;
use crate::store::ValueStore;

/// Bookkeeping for one allocation.
///
/// Slots are never removed from the table: a freed slot stays behind
/// with `freed = true` so that release and dereference through a stale
/// handle copy report [`AllocError::DoubleFree`] and
/// [`AllocError::UseAfterFree`] instead of aliasing new data.
#[derive(Clone, Copy, Debug)]
struct Slot {
    /// Offset of the first element within the store.
    offset: usize,
    /// Element count.
    len: usize,
    /// Whether this allocation has been released.
    freed: bool,
}

/// A simulated heap with explicit allocate/read/write/release operations.
///
/// Storage is bump-placed in a single growable vec and never reclaimed;
/// release is bookkeeping that flips the slot's `freed` flag. Allocation
/// therefore always succeeds given valid arguments — exhaustion is not
/// modelled.
///
/// The arena is single-owner and synchronous: `&mut self` on every
/// mutating operation is the whole concurrency story.
pub struct ManualArena<T> {
    /// The simulated heap.
    store: ValueStore<T>,
    /// `AllocId` → slot, in allocation order.
    slots: IndexMap<AllocId, Slot>,
    /// Next ID to hand out.
    next_id: u32,
    /// Total elements across released allocations.
    freed_values: usize,
}

impl<T: Copy + Default> ManualArena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            store: ValueStore::new(),
            slots: IndexMap::new(),
            next_id: 0,
            freed_values: 0,
        }
    }

    /// Allocate storage for one value of `T`.
    ///
    /// The value is default-initialised. Never fails; consumes one unit
    /// of simulated heap capacity.
    pub fn allocate_scalar(&mut self) -> Handle<T> {
        self.place(1)
    }

    /// Allocate contiguous storage for `count` values of `T`.
    ///
    /// `count` is signed because sizes arrive from untrusted input; a
    /// non-positive count (and a count beyond the handle's `u32` length
    /// field) is reported as [`AllocError::InvalidSize`] rather than
    /// being unrepresentable. The returned handle carries `count` for
    /// bounds-checked access.
    pub fn allocate_array(&mut self, count: i64) -> Result<Handle<T>, AllocError> {
        if count <= 0 {
            return Err(AllocError::InvalidSize { requested: count });
        }
        let len = u32::try_from(count).map_err(|_| AllocError::InvalidSize { requested: count })?;
        Ok(self.place(len as usize))
    }

    /// Read the value of a scalar allocation.
    ///
    /// Shorthand for [`ManualArena::read_at`] with index 0.
    pub fn read(&self, handle: &Handle<T>) -> Result<T, AllocError> {
        self.read_at(handle, 0)
    }

    /// Write the value of a scalar allocation.
    ///
    /// Shorthand for [`ManualArena::write_at`] with index 0.
    pub fn write(&mut self, handle: &Handle<T>, value: T) -> Result<(), AllocError> {
        self.write_at(handle, 0, value)
    }

    /// Read the element at `index`.
    ///
    /// Fails with [`AllocError::NullDereference`] on a null handle,
    /// [`AllocError::UseAfterFree`] on a released one, and
    /// [`AllocError::IndexOutOfRange`] when `index` is outside
    /// `[0, len)`.
    pub fn read_at(&self, handle: &Handle<T>, index: i64) -> Result<T, AllocError> {
        let (slot, index) = self.resolve(handle, index)?;
        Ok(self.store.slice(slot.offset, slot.len)[index])
    }

    /// Write `value` to the element at `index`.
    ///
    /// Same preconditions as [`ManualArena::read_at`].
    pub fn write_at(&mut self, handle: &Handle<T>, index: i64, value: T) -> Result<(), AllocError> {
        let (slot, index) = self.resolve(handle, index)?;
        self.store.slice_mut(slot.offset, slot.len)[index] = value;
        Ok(())
    }

    /// Release an allocation.
    ///
    /// Consumes the handle and returns a fresh null handle that the
    /// caller must adopt in its place. The storage is marked freed;
    /// any further operation through a retained copy of the old handle
    /// is refused. Fails with [`AllocError::DoubleFree`] when the
    /// handle is null or its allocation was already released.
    pub fn release(&mut self, handle: Handle<T>) -> Result<Handle<T>, AllocError> {
        let id = match handle.state {
            HandleState::Null => return Err(AllocError::DoubleFree { id: None }),
            HandleState::Valid { id, .. } => id,
        };
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(AllocError::DoubleFree { id: Some(id) })?;
        if slot.freed {
            return Err(AllocError::DoubleFree { id: Some(id) });
        }
        slot.freed = true;
        self.freed_values += slot.len;
        Ok(Handle::null())
    }

    /// Lazy, read-only traversal of an allocation's elements in index
    /// order.
    ///
    /// The returned iterator borrows the arena; traversal is restarted
    /// by calling `iter` again. Same handle preconditions as
    /// [`ManualArena::read_at`].
    pub fn iter(&self, handle: &Handle<T>) -> Result<ValueIter<'_, T>, AllocError> {
        let slot = self.live_slot(handle)?;
        Ok(ValueIter::new(self.store.slice(slot.offset, slot.len)))
    }

    /// Number of allocations that have not been released.
    pub fn live_count(&self) -> usize {
        self.slots.values().filter(|s| !s.freed).count()
    }

    /// Number of allocations that have been released.
    pub fn freed_count(&self) -> usize {
        self.slots.len() - self.live_count()
    }

    /// Total elements ever allocated, live or freed.
    pub fn allocated_values(&self) -> usize {
        self.store.used()
    }

    /// Elements still reachable through live handles.
    pub fn live_values(&self) -> usize {
        self.store.used() - self.freed_values
    }

    /// Memory footprint of the simulated heap in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.store.memory_bytes()
    }

    /// Place `len` elements and record the slot.
    fn place(&mut self, len: usize) -> Handle<T> {
        let offset = self.store.alloc(len);
        let id = AllocId(self.next_id);
        self.next_id += 1;
        self.slots.insert(
            id,
            Slot {
                offset,
                len,
                freed: false,
            },
        );
        Handle::valid(id, len as u32)
    }

    /// Resolve a handle to its live slot, without an index check.
    fn live_slot(&self, handle: &Handle<T>) -> Result<Slot, AllocError> {
        let id = match handle.state {
            HandleState::Null => return Err(AllocError::NullDereference),
            HandleState::Valid { id, .. } => id,
        };
        // A handle from a different arena names nothing here; treat it
        // as a null dereference.
        let slot = self.slots.get(&id).copied().ok_or(AllocError::NullDereference)?;
        if slot.freed {
            return Err(AllocError::UseAfterFree { id });
        }
        Ok(slot)
    }

    /// Resolve a handle and bounds-check `index` against its slot.
    fn resolve(&self, handle: &Handle<T>, index: i64) -> Result<(Slot, usize), AllocError> {
        let slot = self.live_slot(handle)?;
        if index < 0 || index as u64 >= slot.len as u64 {
            return Err(AllocError::IndexOutOfRange {
                index,
                len: slot.len,
            });
        }
        Ok((slot, index as usize))
    }
}

impl<T: Copy + Default> Default for ManualArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
