//! Generational slot arena backing the network's element and connection stores.

use core::num::NonZeroU32;

use gp_core::Id;

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: NonZeroU32,
    value: Option<T>,
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }
}

impl<T> Arena<T> {
    pub fn insert(&mut self, value: T) -> Id {
        self.len += 1;
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            entry.value = Some(value);
            return Id::new(slot, entry.generation);
        }

        let slot = u32::try_from(self.slots.len()).expect("arena slot count exceeds u32");
        self.slots.push(Slot {
            generation: Id::FIRST_GENERATION,
            value: Some(value),
        });
        Id::from_slot(slot)
    }

    pub fn remove(&mut self, id: Id) -> Option<T> {
        let entry = self.slots.get_mut(id.slot() as usize)?;
        if entry.generation != id.generation() {
            return None;
        }
        let value = entry.value.take()?;
        self.len -= 1;

        // A slot whose generation would wrap is retired instead of reused.
        if let Some(next) = entry.generation.checked_add(1) {
            entry.generation = next;
            self.free.push(id.slot());
        }
        Some(value)
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        let entry = self.slots.get(id.slot() as usize)?;
        if entry.generation != id.generation() {
            return None;
        }
        entry.value.as_ref()
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        let entry = self.slots.get_mut(id.slot() as usize)?;
        if entry.generation != id.generation() {
            return None;
        }
        entry.value.as_mut()
    }

    pub fn contains(&self, id: Id) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots ever allocated; every live `Id::slot()` is below this.
    pub fn slot_capacity(&self) -> usize {
        self.slots.len()
    }
}
