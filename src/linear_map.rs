use std::{iter, mem, slice};

use log::debug;

use crate::{
    config::MapConfig,
    error::LpMapError,
    key::ProbeKey,
};

/// A single slot of the table
#[derive(Debug, Clone)]
pub(crate) enum Slot<K, V> {
    /// Never used since the storage was allocated; terminates every probe
    Empty,
    /// Holds a live key-value pair
    Occupied(K, V),
    /// Previously occupied (tombstone); probes continue past it
    Dead,
}

/// Outcome of walking a key's probe chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key is stored at this index
    Found(usize),
    /// The key is absent; holds the first non-occupied index seen on the walk, if any
    Vacant(Option<usize>),
}

/// A hash map using open addressing with linear probing.
///
/// Every entry lives directly in a single slot array. Collisions are resolved by
/// scanning forward one slot at a time, wrapping at the end of the array. Removed
/// entries leave a tombstone behind so that later lookups keep walking past them;
/// tombstones are only reclaimed when the table grows.
///
/// The table grows by doubling whenever an insertion would push `len + 1` above
/// `capacity * fill_ratio`, and never shrinks.
///
/// Note: This implementation is not thread-safe. Callers sharing a map between
/// threads must wrap it in their own lock, e.g. `Mutex<LinearMap<K, V>>`.
#[derive(Debug, Clone)]
pub struct LinearMap<K, V> {
    /// Slot storage; its length is the table capacity and is never zero
    pub(crate) slots: Box<[Slot<K, V>]>,
    /// Number of occupied slots
    len: usize,
    /// Maximum ratio of `(len + 1)` to capacity, always in `(0, 1]`
    fill_ratio: f64,
}

/// Allocates `capacity` empty slots
fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// Allocates `capacity` empty slots, reporting allocation failure instead of aborting
fn try_empty_slots<K, V>(capacity: usize) -> Result<Box<[Slot<K, V>]>, LpMapError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|source| LpMapError::AllocationFailed { capacity, source })?;
    slots.resize_with(capacity, || Slot::Empty);
    Ok(slots.into_boxed_slice())
}

/// Home slot of a hash in a table of `capacity` slots
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub(crate) fn home_index(hash: u64, capacity: usize) -> usize {
    // capacity is never zero and the remainder is below it, so it fits in usize
    (hash % capacity as u64) as usize
}

/// Slot following `index`, wrapping to the start
fn next_index(index: usize, capacity: usize) -> usize {
    let next = index.saturating_add(1);
    if next >= capacity { 0 } else { next }
}

/// Writes an entry into the first empty slot of its probe chain.
///
/// Only used on freshly allocated storage, which holds no tombstones and no
/// duplicate keys. Returns false if no empty slot exists.
fn place_fresh<K: ProbeKey, V>(slots: &mut [Slot<K, V>], key: K, value: V) -> bool {
    let capacity = slots.len();
    if capacity == 0 {
        return false;
    }
    let mut index = home_index(key.probe_hash(), capacity);

    for _ in 0..capacity {
        if let Some(slot) = slots.get_mut(index) {
            if matches!(slot, Slot::Empty) {
                *slot = Slot::Occupied(key, value);
                return true;
            }
        }
        index = next_index(index, capacity);
    }

    false
}

impl<K, V> LinearMap<K, V> {
    /// Creates a map sized for `expected_size` entries at the given fill ratio.
    ///
    /// A `fill_ratio` outside `(0, 1]` is replaced by
    /// [`DEFAULT_FILL_RATIO`](crate::DEFAULT_FILL_RATIO).
    #[must_use]
    pub fn new(expected_size: usize, fill_ratio: f64) -> Self {
        Self::with_config(MapConfig { expected_size, fill_ratio })
    }

    /// Creates a map from a [`MapConfig`]
    #[must_use]
    pub fn with_config(config: MapConfig) -> Self {
        Self {
            slots: empty_slots(config.initial_capacity()),
            len: 0,
            fill_ratio: config.normalized_fill_ratio(),
        }
    }

    /// Creates a map from a [`MapConfig`], returning an error if the slot
    /// storage cannot be allocated.
    ///
    /// # Errors
    ///
    /// Returns [`LpMapError::AllocationFailed`] when the allocator refuses the
    /// initial slot storage.
    pub fn try_with_config(config: MapConfig) -> Result<Self, LpMapError> {
        Ok(Self {
            slots: try_empty_slots(config.initial_capacity())?,
            len: 0,
            fill_ratio: config.normalized_fill_ratio(),
        })
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the fill ratio in effect, after any fallback to the default
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.fill_ratio
    }

    /// Returns an iterator over the key-value pairs in storage order.
    ///
    /// Storage order is neither insertion order nor stable across growth.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.slots.iter() }
    }

    /// Returns an iterator over the keys in storage order
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values in storage order.
    ///
    /// The iterator is lazy and borrows the map, so the map cannot change while
    /// it is alive. Calling `values` again scans the current contents afresh.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Slot count after doubling
    fn grown_capacity(&self) -> usize {
        self.slots.len().saturating_mul(2)
    }

    /// Whether inserting one more entry would exceed the fill ratio
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn needs_growth(&self) -> bool {
        self.len.saturating_add(1) as f64 > self.slots.len() as f64 * self.fill_ratio
    }
}

impl<K: ProbeKey, V> LinearMap<K, V> {
    /// Walks the probe chain of `key`.
    ///
    /// Stops at the matching slot or at the first empty slot, and visits each
    /// slot at most once so a table without empty slots still terminates.
    fn probe(&self, key: &K) -> Probe {
        let capacity = self.slots.len();
        let mut index = home_index(key.probe_hash(), capacity);
        let mut first_free = None;

        for _ in 0..capacity {
            match self.slots.get(index) {
                Some(Slot::Occupied(stored, _)) if stored == key => return Probe::Found(index),
                Some(Slot::Occupied(..)) => {}
                Some(Slot::Dead) => {
                    if first_free.is_none() {
                        first_free = Some(index);
                    }
                }
                Some(Slot::Empty) => return Probe::Vacant(Some(first_free.unwrap_or(index))),
                None => break,
            }
            index = next_index(index, capacity);
        }

        Probe::Vacant(first_free)
    }

    /// Index of the slot holding `key`, if present
    fn find(&self, key: &K) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match self.probe(key) {
            Probe::Found(index) => Some(index),
            Probe::Vacant(_) => None,
        }
    }

    /// Retrieves the value stored for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.slots.get(self.find(key)?) {
            Some(Slot::Occupied(_, value)) => Some(value),
            _ => None,
        }
    }

    /// Retrieves a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find(key)?;
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(_, value)) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the map holds `key`
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts or updates the value for `key`.
    ///
    /// The fill ratio is checked before the key is looked up, so updating an
    /// existing key can still grow the table.
    pub fn set(&mut self, key: K, value: V) {
        if self.needs_growth() {
            self.resize(self.grown_capacity());
        }
        self.place(key, value);
    }

    /// Like [`set`](Self::set), but reports allocation failure while growing
    /// instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`LpMapError::AllocationFailed`] if the grown slot storage cannot
    /// be allocated. The map is left unchanged in that case.
    pub fn try_set(&mut self, key: K, value: V) -> Result<(), LpMapError> {
        if self.needs_growth() {
            self.try_resize(self.grown_capacity())?;
        }
        self.place(key, value);
        Ok(())
    }

    /// Stores an entry in the current storage, updating a matching key in place
    fn place(&mut self, key: K, value: V) {
        match self.probe(&key) {
            Probe::Found(index) => {
                if let Some(Slot::Occupied(_, stored)) = self.slots.get_mut(index) {
                    *stored = value;
                }
            }
            Probe::Vacant(Some(index)) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Slot::Occupied(key, value);
                    self.len = self.len.saturating_add(1);
                }
            }
            Probe::Vacant(None) => {
                // every slot is occupied by another key; the growth check keeps
                // this from happening, but grow rather than lose the entry
                self.resize(self.grown_capacity());
                self.place(key, value);
            }
        }
    }

    /// Removes `key`, returning true if it was present
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    /// Removes `key` and returns its value, leaving a tombstone in its slot
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.find(key)?;
        let slot = self.slots.get_mut(index)?;

        match mem::replace(slot, Slot::Dead) {
            Slot::Occupied(_, value) => {
                self.len = self.len.saturating_sub(1);
                Some(value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Rehashes into `new_capacity` slots, raised to at least `len + 1`
    fn resize(&mut self, new_capacity: usize) {
        let capacity = new_capacity.max(self.len.saturating_add(1));
        self.rehash_into(empty_slots(capacity));
    }

    /// Fallible [`resize`](Self::resize); leaves the map untouched on failure
    fn try_resize(&mut self, new_capacity: usize) -> Result<(), LpMapError> {
        let capacity = new_capacity.max(self.len.saturating_add(1));
        self.rehash_into(try_empty_slots(capacity)?);
        Ok(())
    }

    /// Moves every live entry into `fresh` and adopts it as the slot storage.
    ///
    /// Entries are moved in old storage order; tombstones are dropped.
    fn rehash_into(&mut self, fresh: Box<[Slot<K, V>]>) {
        let old = mem::replace(&mut self.slots, fresh);
        let old_capacity = old.len();
        let mut moved: usize = 0;
        let mut tombstones: usize = 0;

        for slot in old.into_vec() {
            match slot {
                Slot::Occupied(key, value) => {
                    let placed = place_fresh(&mut self.slots, key, value);
                    debug_assert!(placed, "fresh storage smaller than live entries");
                    if placed {
                        moved = moved.saturating_add(1);
                    }
                }
                Slot::Dead => tombstones = tombstones.saturating_add(1),
                Slot::Empty => {}
            }
        }

        self.len = moved;
        debug!(
            "resized linear map from {old_capacity} to {} slots: {moved} entries moved, \
             {tombstones} tombstones dropped",
            self.slots.len()
        );
    }
}

impl<K, V> Default for LinearMap<K, V> {
    fn default() -> Self {
        Self::with_config(MapConfig::default())
    }
}

impl<K: ProbeKey, V> Extend<(K, V)> for LinearMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: ProbeKey, V> FromIterator<(K, V)> for LinearMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_config(MapConfig::default().with_expected_size(iter.size_hint().0));
        map.extend(iter);
        map
    }
}

impl<'a, K, V> IntoIterator for &'a LinearMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of a `LinearMap`, in storage order
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Remaining slots to scan
    slots: slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied(key, value) => Some((key, value)),
            Slot::Empty | Slot::Dead => None,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

/// Iterator over the keys of a `LinearMap`
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    /// Underlying pair iterator
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// Iterator over the values of a `LinearMap`
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    /// Underlying pair iterator
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{DEFAULT_FILL_RATIO, Hashed};

    /// Key whose hash collides every five values
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct CollidingKey(u32);

    impl ProbeKey for CollidingKey {
        fn probe_hash(&self) -> u64 {
            u64::from(self.0) % 5
        }
    }

    #[test]
    fn test_new_capacity() {
        let map: LinearMap<u64, u64> = LinearMap::new(0, 0.5);
        assert_eq!(map.capacity(), 1);
        assert!(map.is_empty());

        let map: LinearMap<u64, u64> = LinearMap::new(10, 0.5);
        assert_eq!(map.capacity(), 21);

        let map: LinearMap<u64, u64> = LinearMap::new(10, 2.0);
        assert_eq!(map.capacity(), 21);
        assert!((map.fill_ratio() - DEFAULT_FILL_RATIO).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_on_empty_map() {
        let map: LinearMap<u64, u64> = LinearMap::new(16, 0.5);
        assert_eq!(map.get(&1), None);
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn test_set_and_get() {
        let mut map = LinearMap::new(0, 0.5);
        map.set(Hashed("key1".to_string()), 1);
        map.set(Hashed("key2".to_string()), 2);
        map.set(Hashed("key3".to_string()), 3);

        assert_eq!(map.get(&Hashed("key1".to_string())), Some(&1));
        assert_eq!(map.get(&Hashed("key2".to_string())), Some(&2));
        assert_eq!(map.get(&Hashed("key3".to_string())), Some(&3));
        assert_eq!(map.get(&Hashed("key4".to_string())), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_update() {
        let mut map = LinearMap::new(4, 0.5);
        map.set(7_u32, "first");
        map.set(7_u32, "second");

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&7), Some(&"second"));
    }

    #[test]
    fn test_delete() {
        let mut map = LinearMap::new(4, 0.5);
        map.set(1_u32, 10);
        map.set(2_u32, 20);

        assert!(map.delete(&1));
        assert_eq!(map.get(&1), None);
        assert_eq!(map.get(&2), Some(&20));
        assert!(!map.delete(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_delete_on_empty_map() {
        let mut map: LinearMap<u32, u32> = LinearMap::new(0, 0.5);
        assert!(!map.delete(&3));
        assert_eq!(map.remove(&3), None);
    }

    #[test]
    fn test_remove_returns_value() {
        let mut map = LinearMap::new(4, 0.5);
        map.set(CollidingKey(3), "three".to_string());

        assert_eq!(map.remove(&CollidingKey(3)), Some("three".to_string()));
        assert_eq!(map.remove(&CollidingKey(3)), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_tombstone_keeps_chain_intact() {
        let mut map = LinearMap::new(10, 0.5);
        // all three share home slot 0 and occupy slots 0, 1, 2
        map.set(CollidingKey(0), 'a');
        map.set(CollidingKey(5), 'b');
        map.set(CollidingKey(10), 'c');

        assert!(map.delete(&CollidingKey(5)));
        assert_eq!(map.get(&CollidingKey(10)), Some(&'c'));
        assert_eq!(map.get(&CollidingKey(0)), Some(&'a'));
        assert_eq!(map.get(&CollidingKey(5)), None);
    }

    #[test]
    fn test_update_past_tombstone_does_not_duplicate() {
        let mut map = LinearMap::new(10, 0.5);
        map.set(CollidingKey(0), 0);
        map.set(CollidingKey(5), 5);
        map.set(CollidingKey(10), 10);
        assert!(map.delete(&CollidingKey(5)));

        // the tombstone at slot 1 lies before the existing entry at slot 2
        map.set(CollidingKey(10), 100);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&CollidingKey(10)), Some(&100));
        assert_eq!(map.iter().filter(|(key, _)| **key == CollidingKey(10)).count(), 1);
        assert_eq!(map.probe_stats().tombstones, 1);
    }

    #[test]
    fn test_insert_reuses_tombstone() {
        let mut map = LinearMap::new(10, 0.5);
        map.set(CollidingKey(0), 0);
        map.set(CollidingKey(5), 5);
        map.set(CollidingKey(10), 10);
        assert!(map.delete(&CollidingKey(5)));

        map.set(CollidingKey(15), 15);

        assert_eq!(map.capacity(), 21);
        assert_eq!(map.len(), 3);
        assert_eq!(map.probe_stats().tombstones, 0);
        assert!(matches!(map.slots.get(1), Some(Slot::Occupied(CollidingKey(15), 15))));
    }

    #[test]
    fn test_colliding_keys_scenario() {
        let size = 10;
        let mut map = LinearMap::new(0, 0.5);
        for i in 0..size {
            map.set(CollidingKey(i), i + size);
        }
        assert_eq!(map.len(), 10);

        for i in (0..size).step_by(2) {
            assert!(map.delete(&CollidingKey(i)), "key {i} should have been deleted");
        }
        assert_eq!(map.len(), 5);

        for i in 0..size {
            if i % 2 == 0 {
                assert_eq!(map.get(&CollidingKey(i)), None);
                assert!(!map.delete(&CollidingKey(i)));
            } else {
                assert_eq!(map.get(&CollidingKey(i)), Some(&(i + size)));
            }
        }
        assert_eq!(map.len(), 5);

        map.set(CollidingKey(4), 99);
        assert_eq!(map.len(), 6);
        assert_eq!(map.get(&CollidingKey(4)), Some(&99));
    }

    #[test]
    fn test_overwrite_all_then_add_one() {
        let size = 10;
        let mut map = LinearMap::new(0, 0.5);
        for i in 0..size {
            map.set(CollidingKey(i), i + size);
        }
        for i in 0..=size {
            map.set(CollidingKey(i), i);
        }

        assert_eq!(map.len(), 11);
        for i in 0..=size {
            assert_eq!(map.get(&CollidingKey(i)), Some(&i));
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_growth_preserves_contents() {
        let mut map = LinearMap::new(0, 0.5);
        let mut capacity = map.capacity();

        for i in 0..200_u64 {
            map.set(i * 7919, i);
            assert!(map.len() as f64 <= map.capacity() as f64 * 0.5);

            if map.capacity() != capacity {
                assert!(map.capacity() > capacity);
                capacity = map.capacity();
            }
            assert_eq!(map.len(), usize::try_from(i + 1).unwrap());
            for j in 0..=i {
                assert_eq!(map.get(&(j * 7919)), Some(&j));
            }
        }
    }

    #[test]
    fn test_growth_drops_tombstones() {
        let mut map = LinearMap::new(4, 0.5);
        for i in 0..4_u32 {
            map.set(i, i);
        }
        assert!(map.delete(&0));
        assert!(map.delete(&1));
        assert_eq!(map.probe_stats().tombstones, 2);

        let capacity = map.capacity();
        while map.capacity() == capacity {
            let next = u32::try_from(map.len()).unwrap() + 100;
            map.set(next, next);
        }

        assert_eq!(map.probe_stats().tombstones, 0);
        assert_eq!(map.get(&2), Some(&2));
        assert_eq!(map.get(&3), Some(&3));
    }

    #[test]
    fn test_update_can_trigger_growth() {
        let mut map = LinearMap::new(0, 0.5);
        map.set(1_u32, 'a');
        assert_eq!(map.capacity(), 2);

        // len + 1 == 2 > 2 * 0.5, so growth happens before the key is found
        map.set(1_u32, 'b');
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&'b'));
    }

    #[test]
    fn test_full_table_lookup_terminates() {
        let mut map = LinearMap::new(0, 1.0);
        map.set(CollidingKey(0), 0);
        assert_eq!(map.capacity(), 1);
        assert_eq!(map.len(), 1);

        assert_eq!(map.get(&CollidingKey(5)), None);
        assert!(!map.delete(&CollidingKey(5)));

        map.set(CollidingKey(5), 5);
        assert_eq!(map.get(&CollidingKey(0)), Some(&0));
        assert_eq!(map.get(&CollidingKey(5)), Some(&5));
    }

    #[test]
    fn test_lookup_through_tombstones_only() {
        let mut map = LinearMap::new(2, 1.0);
        assert_eq!(map.capacity(), 3);
        map.set(CollidingKey(0), 0);
        map.set(CollidingKey(5), 5);
        map.set(CollidingKey(10), 10);
        assert!(map.delete(&CollidingKey(0)));
        assert!(map.delete(&CollidingKey(5)));

        // no empty slot remains; the walk must stop after one lap
        assert_eq!(map.get(&CollidingKey(15)), None);
        assert_eq!(map.get(&CollidingKey(10)), Some(&10));
    }

    #[test]
    fn test_get_mut() {
        let mut map = LinearMap::new(0, 0.5);
        map.set(Hashed("key1"), 1);

        if let Some(value) = map.get_mut(&Hashed("key1")) {
            *value += 10;
        }

        assert_eq!(map.get(&Hashed("key1")), Some(&11));
        assert_eq!(map.get_mut(&Hashed("key2")), None);
    }

    #[test]
    fn test_values_in_storage_order() {
        let mut map = LinearMap::new(10, 0.5);
        map.set(3_u32, 'c');
        map.set(1_u32, 'a');
        map.set(2_u32, 'b');

        let values: Vec<char> = map.values().copied().collect();
        assert_eq!(values, vec!['a', 'b', 'c']);

        let keys: Vec<u32> = map.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3]);

        assert!(map.delete(&2));
        let values: Vec<char> = map.values().copied().collect();
        assert_eq!(values, vec!['a', 'c']);
    }

    #[test]
    fn test_iter_and_into_iter() {
        let mut map = LinearMap::new(0, 0.5);
        map.set(Hashed("key1".to_string()), 1);
        map.set(Hashed("key2".to_string()), 2);
        map.set(Hashed("key3".to_string()), 3);

        let mut count = 0;
        let mut sum = 0;
        for (_, &value) in &map {
            count += 1;
            sum += value;
        }

        assert_eq!(count, 3);
        assert_eq!(sum, 6);
        assert_eq!(map.iter().count(), map.len());
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut map: LinearMap<u64, &str> = [(1, "one"), (2, "two")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&2), Some(&"two"));

        map.extend([(2, "deux"), (3, "trois")]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&2), Some(&"deux"));
        assert_eq!(map.get(&3), Some(&"trois"));
    }

    #[test]
    fn test_default() {
        let mut map: LinearMap<u8, u8> = LinearMap::default();
        assert_eq!(map.capacity(), 1);
        map.set(1, 1);
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_try_with_config_reports_allocation_failure() {
        let config = MapConfig::default().with_expected_size(usize::MAX);
        let result = LinearMap::<u64, u64>::try_with_config(config);

        assert!(matches!(
            result,
            Err(LpMapError::AllocationFailed { capacity: usize::MAX, .. })
        ));
    }

    #[test]
    fn test_try_set() {
        let mut map = LinearMap::try_with_config(MapConfig::default()).unwrap();
        for i in 0..50_u64 {
            map.try_set(i, i * 2).unwrap();
        }

        assert_eq!(map.len(), 50);
        assert_eq!(map.get(&49), Some(&98));
    }
}
