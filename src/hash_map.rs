use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::ops::Index;

use crate::DefaultHashBuilder;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// A hash map implemented using the Robin Hood HashTable as the underlying
/// storage.
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement `Hash + Eq`
/// and uses a configurable hasher builder `S` to hash keys. The underlying
/// storage uses the Robin Hood hashing algorithm provided by the `HashTable`:
/// bounded probe lengths, backward-shift deletion, and growth past 50% load.
///
/// With the default `foldhash` feature enabled, `S` defaults to a fast,
/// randomly seeded hasher and maps can be created with [`HashMap::new`].
///
/// References returned by lookups and the entry API are invalidated by the
/// next mutating call: insertion and deletion relocate entries, and growth
/// relocates all of them.
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug + Hash + Eq,
    V: Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a new hash map with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String, _> =
    ///     HashMap::with_hasher(foldhash::fast::RandomState::default());
    /// assert!(map.is_empty());
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates a new hash map with the specified slot capacity and hasher
    /// builder.
    ///
    /// The slot count is rounded up to the next power of two (minimum 8); the
    /// map holds up to half that many entries before resizing.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String, _> =
    ///     HashMap::with_capacity_and_hasher(100, foldhash::fast::RandomState::default());
    /// assert_eq!(map.capacity(), 128);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Returns the number of key-value pairs in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map holds no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// assert!(map.is_empty());
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the map's backing table.
    ///
    /// Always a power of two. The map resizes once more than half of its
    /// slots are occupied, so up to `capacity() / 2` entries fit before a
    /// resize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String> = HashMap::with_capacity(100);
    /// assert_eq!(map.capacity(), 128);
    /// ```
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Drops every key-value pair, leaving the map empty.
    ///
    /// The allocated capacity is retained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// The map never shrinks; reserving less than the current capacity
    /// accommodates is a no-op.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Inserts a key-value pair into the map.
    ///
    /// A new key returns `None`. An existing key keeps its stored key, has
    /// its value replaced, and returns the previous value; `len()` is
    /// unchanged and no entry moves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => {
                let old_value = core::mem::replace(&mut entry.get_mut().1, value);
                Some(old_value)
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Looks up the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Looks up the value stored for `key`, returning a mutable reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if `key` has an entry in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// The entries that probed past the removed one are shifted backward, so
    /// no tombstone is left behind. Removing an absent key is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes `key` from the map, returning the stored key and value if it
    /// was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key)
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// `entry(key).or_default()` provides insert-default-on-miss semantics:
    /// a missing key is inserted with `V::default()` and a mutable reference
    /// to the (new or existing) value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    ///
    /// *map.entry("poneyland").or_default() += 10;
    /// assert_eq!(map[&"poneyland"], 10);
    ///
    /// map.entry("horseland").or_insert(3);
    /// assert_eq!(map[&"horseland"], 3);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Iterates over the map's key-value pairs, in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Iterates over the map's keys, in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let keys: Vec<_> = map.keys().collect();
    /// assert_eq!(keys.len(), 2);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the map's values, in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let values: Vec<_> = map.values().collect();
    /// assert_eq!(values.len(), 2);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Empties the map, yielding each key-value pair by value.
    ///
    /// The map keeps its capacity; pairs not consumed by the iterator are
    /// dropped with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let pairs: Vec<_> = map.drain().collect();
    /// assert!(map.is_empty());
    /// assert_eq!(pairs.len(), 2);
    /// ```
    pub fn drain(&mut self) -> Drain<K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }
}

#[cfg(any(feature = "foldhash", feature = "std"))]
impl<K, V> HashMap<K, V, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    /// Creates a new hash map using the default hasher builder.
    ///
    /// Defined on the concrete [`DefaultHashBuilder`] so plain
    /// `HashMap::new()` infers the hasher; use [`HashMap::with_hasher`] to
    /// pick a different one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a new hash map with the specified slot capacity using the
    /// default hasher builder.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String> = HashMap::with_capacity(100);
    /// assert_eq!(map.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Index<&K> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map. Use
    /// [`entry`](HashMap::entry) with
    /// [`or_default`](Entry::or_default) for insert-default-on-miss
    /// semantics.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

/// The result of [`HashMap::entry`]: the probed location for one key, either
/// already holding a value or ready to accept one.
pub enum Entry<'a, K, V> {
    /// The key has no entry yet.
    Vacant(VacantEntry<'a, K, V>),
    /// The key already has an entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns the entry's value, first inserting `default` if the entry is
    /// vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Returns the entry's value, first inserting the closure's result if the
    /// entry is vacant.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to the value if the entry is occupied, then returns the
    /// entry for further chaining.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns the key this entry was probed with.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Returns the entry's value, first inserting `V::default()` if the
    /// entry is vacant.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// An entry slot for a key that is not yet in the map. Holds the key until
/// a value is inserted alongside it.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Returns the key that will be stored on insertion.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Gives the key back without inserting anything.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts `value` under the held key and returns a mutable reference
    /// to it.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// An entry slot for a key already present in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Returns the stored key.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Returns the stored value.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Returns the stored value mutably, borrowed from the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Consumes the entry, returning the value borrowed from the map itself.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Replaces the stored value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry, returning its value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry, returning the stored key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<K, V> {
    inner: crate::hash_table::Drain<(K, V)>,
}

impl<K, V> Iterator for Drain<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::hash::BuildHasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone)]
    struct SipHashBuilder {
        k1: u64,
        k2: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k1, self.k2)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k1: rng.try_next_u64().unwrap_or(0),
                k2: rng.try_next_u64().unwrap_or(0),
            }
        }
    }

    #[test]
    fn test_constructors() {
        let empty: HashMap<u32, String, SipHashBuilder> = HashMap::default();
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 8);

        let sized = HashMap::<u32, String, _>::with_capacity_and_hasher(
            48,
            SipHashBuilder::default(),
        );
        assert!(sized.is_empty());
        assert_eq!(sized.capacity(), 64);
    }

    #[test]
    #[cfg(any(feature = "foldhash", feature = "std"))]
    fn test_new_infers_default_hasher() {
        // `HashMap::new()` with no type annotation for the hasher must
        // resolve to the default hasher builder.
        let mut map = HashMap::new();
        map.insert(1, "one");
        assert_eq!(map.get(&1), Some(&"one"));

        let sized = HashMap::<u64, u64, _>::with_capacity(20);
        assert_eq!(sized.capacity(), 32);
    }

    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn test_with_capacity_zero_panics() {
        let _ = HashMap::<i32, i32, _>::with_capacity_and_hasher(0, SipHashBuilder::default());
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        assert_eq!(map.insert("alpha", 1), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"alpha"), Some(&1));
        assert_eq!(map.get(&"beta"), None);

        // Inserting over an existing key replaces the value, returns the old
        // one, and leaves the length unchanged.
        assert_eq!(map.insert("alpha", 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"alpha"), Some(&2));
    }

    #[test]
    fn test_get_mut() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(3, String::from("thr"));

        map.get_mut(&3).unwrap().push_str("ee");
        assert_eq!(map.get(&3).map(String::as_str), Some("three"));
        assert_eq!(map.get_mut(&4), None);
    }

    #[test]
    fn test_contains_key() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        assert!(!map.contains_key(&10));

        map.insert(10, ());
        assert!(map.contains_key(&10));
        assert!(!map.contains_key(&11));
    }

    #[test]
    fn test_remove_and_remove_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, 10);
        map.insert(2, 20);

        assert_eq!(map.remove(&1), Some(10));
        assert_eq!(map.remove(&1), None);
        assert_eq!(map.remove(&99), None);
        assert_eq!(map.len(), 1);

        assert_eq!(map.remove_entry(&2), Some((2, 20)));
        assert_eq!(map.remove_entry(&2), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_clear_retains_capacity() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..50 {
            map.insert(i, i);
        }
        let capacity = map.capacity();

        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains_key(&0));
        assert_eq!(map.capacity(), capacity);

        // A cleared map accepts new entries.
        map.insert(1, 1);
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_reserve() {
        let mut map = HashMap::<i32, String, _>::with_hasher(SipHashBuilder::default());
        map.reserve(1000);
        assert!(map.capacity() >= 2000);
    }

    #[test]
    fn test_entry_api() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        assert_eq!(map.entry(1).or_insert(10), &10);
        // A second or_insert on the same key keeps the first value.
        assert_eq!(map.entry(1).or_insert(99), &10);
        assert_eq!(map.len(), 1);

        map.entry(2).or_insert_with(|| 20);
        assert_eq!(map.get(&2), Some(&20));

        map.entry(1).and_modify(|v| *v += 1).or_insert(0);
        map.entry(3).and_modify(|v| *v += 1).or_insert(30);
        assert_eq!(map.get(&1), Some(&11));
        assert_eq!(map.get(&3), Some(&30));

        assert_eq!(map.entry(4).key(), &4);
    }

    #[test]
    fn test_entry_or_default_creates_entry() {
        let mut map: HashMap<i32, Vec<i32>, SipHashBuilder> =
            HashMap::with_hasher(SipHashBuilder::default());
        assert!(map.is_empty());

        // Insert-default-on-miss: the first access creates a default entry.
        map.entry(1).or_default().push(42);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&vec![42]));

        // Subsequent access returns the existing value unchanged.
        map.entry(1).or_default().push(24);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&vec![42, 24]));
    }

    #[test]
    fn test_index() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "one".to_string());
        assert_eq!(map[&1], "one".to_string());
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn test_index_missing_key_panics() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::default();
        let _ = &map[&1];
    }

    #[test]
    fn test_occupied_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(7, 70);

        let Entry::Occupied(mut entry) = map.entry(7) else {
            panic!("expected occupied entry");
        };
        assert_eq!(entry.key(), &7);
        assert_eq!(entry.get(), &70);

        *entry.get_mut() += 1;
        assert_eq!(entry.insert(700), 71);
        assert_eq!(entry.remove_entry(), (7, 700));

        assert!(map.is_empty());
    }

    #[test]
    fn test_vacant_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        let Entry::Vacant(entry) = map.entry(7) else {
            panic!("expected vacant entry");
        };
        assert_eq!(entry.key(), &7);
        *entry.insert(70) += 1;

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&7), Some(&71));
    }

    #[test]
    fn test_iterators() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..6i32 {
            map.insert(i, i * i);
        }

        let mut pairs: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 4), (3, 9), (4, 16), (5, 25)]);

        let mut keys: Vec<i32> = map.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![0, 1, 2, 3, 4, 5]);

        let mut values: Vec<i32> = map.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![0, 1, 4, 9, 16, 25]);
    }

    #[test]
    fn test_drain() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..8i32 {
            map.insert(i, i);
        }
        let capacity = map.capacity();

        let mut drained: Vec<(i32, i32)> = map.drain().collect();
        drained.sort_unstable();
        assert_eq!(drained, (0..8).map(|i| (i, i)).collect::<Vec<_>>());

        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
    }

    #[test]
    fn test_insert_remove_interleaved() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        for i in 0..1000 {
            map.insert(i, i * 2);
        }
        assert_eq!(map.len(), 1000);

        // Removing the even keys must leave every odd key intact.
        for i in (0..1000).step_by(2) {
            assert_eq!(map.remove(&i), Some(i * 2));
        }
        assert_eq!(map.len(), 500);
        for i in 0..1000 {
            let expected = if i % 2 == 1 { Some(i * 2) } else { None };
            assert_eq!(map.get(&i).copied(), expected);
        }
    }

    #[test]
    fn test_load_factor_invariant() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        for i in 0..500 {
            map.insert(i, i);
            assert!(map.len() * 2 <= map.capacity());
            assert!(map.capacity().is_power_of_two());
        }
        for i in 0..500 {
            map.remove(&i);
            assert!(map.len() * 2 <= map.capacity());
            assert!(map.capacity().is_power_of_two());
        }
    }

    #[test]
    fn test_owned_string_keys() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for word in ["north", "south", "east", "west"] {
            map.insert(word.to_string(), word.len());
        }

        assert_eq!(map.get(&"north".to_string()), Some(&5));
        assert_eq!(map.get(&"east".to_string()), Some(&4));
        assert_eq!(map.get(&"up".to_string()), None);
        assert_eq!(map.remove(&"west".to_string()), Some(4));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_default_trait() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::default();
        assert!(map.is_empty());
    }

    #[test]
    fn test_extend_and_from_iterator() {
        let map: HashMap<i32, i32, SipHashBuilder> = (0..10).map(|i| (i, i * i)).collect();
        assert_eq!(map.len(), 10);
        assert_eq!(map.get(&3), Some(&9));

        let mut map = map;
        map.extend((10..20).map(|i| (i, i * i)));
        assert_eq!(map.len(), 20);
        assert_eq!(map.get(&15), Some(&225));
    }

    #[test]
    fn test_nested_collection_values() {
        let mut map: HashMap<u8, Vec<u8>, SipHashBuilder> = HashMap::default();

        map.entry(0).or_default().extend([1, 2]);
        map.insert(1, vec![3]);
        map.get_mut(&0).unwrap().push(9);

        assert_eq!(map.get(&0), Some(&vec![1, 2, 9]));
        assert_eq!(map.get(&1), Some(&vec![3]));
    }
}
