//! Fixed-capacity slot pool
//!
//! Beams, enemies and wrecks all live in one of these. A slot's index is its
//! identity for the whole run; spawning picks the lowest free index so runs
//! are reproducible.

use super::transform::Transform;

/// Index of a slot within its pool
pub type SlotIndex = usize;

/// One pool entry
#[derive(Debug, Clone)]
pub struct Slot<T> {
    /// Inactive slots hold a stale transform that must not be drawn or collided
    pub active: bool,
    pub transform: Transform,
    pub data: T,
}

/// Pool of `N` slots with an active flag each
#[derive(Debug, Clone)]
pub struct EntityPool<T, const N: usize> {
    slots: [Slot<T>; N],
}

impl<T: Default, const N: usize> EntityPool<T, N> {
    /// All slots inactive, each starting from `template`
    pub fn new(template: Transform) -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot {
                active: false,
                transform: template,
                data: T::default(),
            }),
        }
    }
}

impl<T, const N: usize> EntityPool<T, N> {
    /// Mark the lowest-index inactive slot active and return it.
    /// `None` when the pool is full; nothing changes in that case.
    pub fn try_acquire(&mut self) -> Option<SlotIndex> {
        let index = self.slots.iter().position(|s| !s.active)?;
        self.slots[index].active = true;
        Some(index)
    }

    /// Mark a slot inactive (idempotent)
    pub fn release(&mut self, index: SlotIndex) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.active = false;
        }
    }

    /// Release every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }

    #[inline]
    pub fn is_active(&self, index: SlotIndex) -> bool {
        self.slots.get(index).is_some_and(|s| s.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.active)
    }

    pub fn get(&self, index: SlotIndex) -> Option<&Slot<T>> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: SlotIndex) -> Option<&mut Slot<T>> {
        self.slots.get_mut(index)
    }

    /// Active slots in index order
    pub fn iter_active(&self) -> impl Iterator<Item = (SlotIndex, &Slot<T>)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.active)
    }

    /// Active slots in index order, mutable
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (SlotIndex, &mut Slot<T>)> {
        self.slots.iter_mut().enumerate().filter(|(_, s)| s.active)
    }

    /// All slots, active or not (matrix refresh touches every slot)
    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut Slot<T>> {
        self.slots.iter_mut()
    }

    /// Cursor over active slots that re-reads the flags on every step, so
    /// slots may be released between steps
    pub fn cursor(&self) -> ActiveCursor {
        ActiveCursor { next: 0 }
    }
}

/// Restartable walk over a pool's active slots.
///
/// Holds no borrow: each `next_in` call looks at the pool as it is now, so a
/// slot released mid-walk is skipped when the walk reaches it.
#[derive(Debug, Clone, Copy)]
pub struct ActiveCursor {
    next: SlotIndex,
}

impl ActiveCursor {
    pub fn next_in<T, const N: usize>(&mut self, pool: &EntityPool<T, N>) -> Option<SlotIndex> {
        while self.next < N {
            let index = self.next;
            self.next += 1;
            if pool.is_active(index) {
                return Some(index);
            }
        }
        None
    }
}
