//! `IdentityTable` — generational storage for node values.
//!
//! Every node keeps its value in one slot of the table and is the only owner of
//! that slot. Edges hold an [`Identity`] (slot index + generation) instead of a
//! reference to the node, so they can observe the value without keeping it
//! alive.
//!
//! Vacating a slot bumps its generation. Any identity minted before that point
//! stops resolving, even after the slot is reused for a different value, which
//! is how an edge detects that its destination is gone.
//!
//! # Performance
//! - `insert`: O(1) (reuses vacated slots first)
//! - `get` / `get_mut` / `remove`: O(1)

/// A non-owning handle to a slot in an [`IdentityTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity {
    index: usize,
    generation: u32,
}

impl Identity {
    /// Returns the slot index this identity points at.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the generation the slot had when this identity was minted.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<usize> },
}

/// A generational slot table handing out [`Identity`] keys.
#[derive(Debug, Clone)]
pub struct IdentityTable<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> IdentityTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty table with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value` in a fresh or vacated slot and returns its identity.
    pub fn insert(&mut self, value: T) -> Identity {
        self.len += 1;

        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index];
            let (generation, next_free) = match *slot {
                Slot::Vacant { generation, next_free } => (generation, next_free),
                Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            };
            self.free_head = next_free;
            *slot = Slot::Occupied { generation, value };
            Identity { index, generation }
        } else {
            let index = self.slots.len();
            self.slots.push(Slot::Occupied { generation: 0, value });
            Identity { index, generation: 0 }
        }
    }

    /// Returns the value behind `identity`, or `None` if it no longer resolves.
    #[inline]
    pub fn get(&self, identity: Identity) -> Option<&T> {
        match self.slots.get(identity.index)? {
            Slot::Occupied { generation, value } if *generation == identity.generation => Some(value),
            _ => None,
        }
    }

    /// Returns the value behind `identity` mutably.
    ///
    /// Writing through this reference changes what every live identity for the
    /// slot resolves to; the identity itself stays valid.
    #[inline]
    pub fn get_mut(&mut self, identity: Identity) -> Option<&mut T> {
        match self.slots.get_mut(identity.index)? {
            Slot::Occupied { generation, value } if *generation == identity.generation => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if `identity` still resolves.
    #[inline]
    pub fn contains(&self, identity: Identity) -> bool {
        self.get(identity).is_some()
    }

    /// Vacates the slot behind `identity`, returning its value.
    ///
    /// Afterwards every copy of `identity` fails to resolve.
    pub fn remove(&mut self, identity: Identity) -> Option<T> {
        if !self.contains(identity) {
            return None;
        }

        let vacant = Slot::Vacant {
            generation: identity.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[identity.index], vacant) {
            Slot::Occupied { value, .. } => {
                self.free_head = Some(identity.index);
                self.len -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => unreachable!("slot checked as occupied"),
        }
    }

    /// Vacates every slot. Identities handed out earlier stop resolving.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            if let Slot::Occupied { generation, .. } = self.slots[index] {
                self.slots[index] = Slot::Vacant {
                    generation: generation.wrapping_add(1),
                    next_free: self.free_head,
                };
                self.free_head = Some(index);
            }
        }
        self.len = 0;
    }
}

impl<T> Default for IdentityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
