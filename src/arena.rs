//! Slab storage for tree nodes. Nodes refer to each other by [`NodeId`] instead of pointers so
//! that the parent back-reference can't form an ownership cycle.

use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

/// Stable handle to a slot in an [`Arena`]. Stays valid until the slot is freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    /// Index of the next vacant slot, forming the free list.
    Vacant(Option<usize>),
}

#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        Ok(Self {
            slots,
            free_head: None,
            len: 0,
        })
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `value`, reusing a freed slot when one exists. If the backing storage has to grow
    /// and can't, `value` is dropped and the arena is unchanged.
    pub(crate) fn try_alloc(&mut self, value: T) -> Result<NodeId, TryReserveError> {
        let index = match self.free_head {
            Some(index) => {
                let Slot::Vacant(next) = self.slots[index] else {
                    unreachable!("free list points at an occupied slot");
                };
                self.free_head = next;
                self.slots[index] = Slot::Occupied(value);
                index
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            }
        };
        self.len += 1;
        Ok(NodeId(index))
    }

    /// Releases the slot for `id` and hands back what it stored.
    ///
    /// ## Panics
    ///
    /// When `id` was already freed.
    pub(crate) fn free(&mut self, id: NodeId) -> T {
        let slot = std::mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free_head));
        match slot {
            Slot::Occupied(value) => {
                self.free_head = Some(id.0);
                self.len -= 1;
                value
            }
            Slot::Vacant(_) => panic!("double free of arena slot {}", id.0),
        }
    }

    /// Mutable access to two distinct slots at once.
    ///
    /// ## Panics
    ///
    /// When `a == b` or either slot is vacant.
    pub(crate) fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut needs two distinct slots");
        let (low, high, flipped) = if a.0 < b.0 {
            (a.0, b.0, false)
        } else {
            (b.0, a.0, true)
        };
        let (head, tail) = self.slots.split_at_mut(high);
        let (low, high) = match (&mut head[low], &mut tail[0]) {
            (Slot::Occupied(low), Slot::Occupied(high)) => (low, high),
            _ => panic!("use of freed arena slot"),
        };
        if flipped {
            (high, low)
        } else {
            (low, high)
        }
    }

    /// Drops every stored value. The backing allocation is kept for reuse.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match &self.slots[id.0] {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => panic!("use of freed arena slot {}", id.0),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.0] {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => panic!("use of freed arena slot {}", id.0),
        }
    }
}
