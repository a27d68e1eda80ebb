//! Identity cache of live objects keyed by primary key.
//!
//! # Invariants
//! - At most one live object per key.
//! - Entries are shared `Rc<RefCell<T>>` handles, so the map is `!Send`.

use crate::model::department::DepartmentId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct IdentityMap<T> {
    entries: HashMap<DepartmentId, Rc<RefCell<T>>>,
}

impl<T> Default for IdentityMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IdentityMap<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns a new handle to the live object for `id`, if cached.
    pub fn get(&self, id: DepartmentId) -> Option<Rc<RefCell<T>>> {
        self.entries.get(&id).cloned()
    }

    /// Registers `handle` as the live object for `id`, returning any displaced entry.
    pub fn insert(
        &mut self,
        id: DepartmentId,
        handle: Rc<RefCell<T>>,
    ) -> Option<Rc<RefCell<T>>> {
        self.entries.insert(id, handle)
    }

    pub fn remove(&mut self, id: DepartmentId) -> Option<Rc<RefCell<T>>> {
        self.entries.remove(&id)
    }

    pub fn contains(&self, id: DepartmentId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the map, handing back every evicted handle.
    pub fn drain(&mut self) -> Vec<Rc<RefCell<T>>> {
        self.entries.drain().map(|(_, handle)| handle).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityMap;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn get_returns_same_allocation() {
        let mut map = IdentityMap::new();
        let handle = Rc::new(RefCell::new("payroll".to_string()));
        map.insert(1, Rc::clone(&handle));

        let first = map.get(1).unwrap();
        let second = map.get(1).unwrap();
        assert!(Rc::ptr_eq(&first, &handle));
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn remove_and_drain_evict_entries() {
        let mut map = IdentityMap::new();
        map.insert(1, Rc::new(RefCell::new(1_u8)));
        map.insert(2, Rc::new(RefCell::new(2_u8)));

        assert!(map.remove(1).is_some());
        assert!(!map.contains(1));
        assert!(map.remove(1).is_none());
        assert_eq!(map.len(), 1);

        let drained = map.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(*drained[0].borrow(), 2);
        assert!(map.is_empty());
    }
}
