use std::hash::Hash;

use ahash::HashMap;

const NIL: usize = usize::MAX;

#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Bounded least-recently-used cache of pair scores. Each worker owns its own instance.
/// Entries live in a slab linked in recency order; the least recently used entry is
/// recycled once the capacity is reached. Zero capacity disables caching altogether.
#[derive(Clone, Debug)]
pub struct PairCache<K, V> {
    capacity: usize,
    index: HashMap<K, usize>,
    entries: Vec<Entry<K, V>>,
    // Most and least recently used entries
    head: usize,
    tail: usize,
    hits: usize,
    misses: usize,
}

impl<K: Hash + Eq + Copy, V: Copy> PairCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: HashMap::default(),
            entries: Vec::new(),
            head: NIL,
            tail: NIL,
            hits: 0,
            misses: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop all entries and counters, optionally changing the capacity.
    pub fn reset(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.index.clear();
        self.entries.clear();
        self.head = NIL;
        self.tail = NIL;
        self.hits = 0;
        self.misses = 0;
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.index.get(key) {
            Some(&ind) => {
                self.hits += 1;
                self.detach(ind);
                self.push_front(ind);
                Some(self.entries[ind].value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        if let Some(&ind) = self.index.get(&key) {
            self.entries[ind].value = value;
            self.detach(ind);
            self.push_front(ind);
            return;
        }

        let ind = if self.entries.len() < self.capacity {
            self.entries.push(Entry {
                key,
                value,
                prev: NIL,
                next: NIL,
            });
            self.entries.len() - 1
        } else {
            let ind = self.tail;
            self.detach(ind);
            self.index.remove(&self.entries[ind].key);
            self.entries[ind].key = key;
            self.entries[ind].value = value;
            ind
        };
        self.index.insert(key, ind);
        self.push_front(ind);
    }

    fn detach(&mut self, ind: usize) {
        let (prev, next) = (self.entries[ind].prev, self.entries[ind].next);
        match prev {
            NIL => self.head = next,
            prev => self.entries[prev].next = next,
        }
        match next {
            NIL => self.tail = prev,
            next => self.entries[next].prev = prev,
        }
        self.entries[ind].prev = NIL;
        self.entries[ind].next = NIL;
    }

    fn push_front(&mut self, ind: usize) {
        self.entries[ind].next = self.head;
        match self.head {
            NIL => self.tail = ind,
            head => self.entries[head].prev = ind,
        }
        self.head = ind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_least_recently_used_is_evicted() {
        let mut cache = PairCache::new(2);
        cache.put((0, 1), 1.0);
        cache.put((0, 2), 2.0);
        assert_eq!(cache.get(&(0, 1)), Some(1.0));

        cache.put((1, 2), 3.0);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&(0, 2)), None);
        assert_eq!(cache.get(&(0, 1)), Some(1.0));
        assert_eq!(cache.get(&(1, 2)), Some(3.0));

        // (0, 1) is now the oldest entry
        cache.put((2, 3), 4.0);
        assert_eq!(cache.get(&(0, 1)), None);
        assert_eq!(cache.get(&(2, 3)), Some(4.0));
        assert_eq!((cache.hits(), cache.misses()), (4, 2));
    }

    #[test]
    fn test_ordered_keys() {
        let mut cache = PairCache::new(4);
        cache.put((1, 0), 5.0);
        assert_eq!(cache.get(&(0, 1)), None);
        assert_eq!(cache.get(&(1, 0)), Some(5.0));
    }

    #[test]
    fn test_update_refreshes_entry() {
        let mut cache = PairCache::new(2);
        cache.put('a', 1);
        cache.put('b', 2);
        cache.put('a', 3);
        cache.put('c', 4);

        assert_eq!(cache.get(&'b'), None);
        assert_eq!(cache.get(&'a'), Some(3));
        assert_eq!(cache.get(&'c'), Some(4));
    }

    #[test]
    fn test_single_slot() {
        let mut cache = PairCache::new(1);
        for key in 0..10 {
            cache.put(key, key * 2);
            assert_eq!(cache.get(&key), Some(key * 2));
            assert_eq!(cache.len(), 1);
        }
        assert_eq!(cache.get(&8), None);
    }

    #[test]
    fn test_disabled() {
        let mut cache = PairCache::new(0);
        cache.put((0, 1), 1.0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&(0, 1)), None);

        cache.reset(1);
        cache.put((0, 1), 1.0);
        assert_eq!(cache.get(&(0, 1)), Some(1.0));
        assert_eq!(cache.capacity(), 1);
    }
}
