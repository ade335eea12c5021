use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem;

/// Smallest slot count a table will ever have. Requested capacities are
/// rounded up to a power of two and clamped to this floor.
const MIN_CAPACITY: usize = 8;

/// A single slot in the table.
///
/// A sum type rather than a flat record with a "-1 means empty" distance
/// sentinel: the compiler enforces that no value or hash is ever read out of
/// an empty slot. `dist` is a full `usize` so probe distances can never
/// overflow the field.
enum Slot<V> {
    Empty,
    Occupied(Bucket<V>),
}

/// Payload of an occupied slot: the entry's full 64-bit hash, its probe
/// distance from the home slot `hash & (capacity - 1)`, and the value.
///
/// Keeping the hash allows growth to rehome entries without rehashing them,
/// and lets lookups reject non-matching slots before running the caller's
/// equality predicate.
struct Bucket<V> {
    hash: u64,
    dist: usize,
    value: V,
}

impl<V> Clone for Slot<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Slot::Empty => Slot::Empty,
            Slot::Occupied(bucket) => Slot::Occupied(Bucket {
                hash: bucket.hash,
                dist: bucket.dist,
                value: bucket.value.clone(),
            }),
        }
    }
}

fn empty_slots<V>(capacity: usize) -> Box<[Slot<V>]> {
    debug_assert!(capacity.is_power_of_two());
    (0..capacity).map(|_| Slot::Empty).collect()
}

/// A hash table using Robin Hood hashing with backward-shift deletion.
///
/// `HashTable<V>` stores values of type `V` and provides fast insertion,
/// lookup, and removal operations. Unlike standard hash maps, this
/// implementation requires you to provide both the hash value and an equality
/// predicate for each operation.
///
/// ## Algorithm
///
/// The table is a single power-of-two array of slots, at most half full.
/// Every occupied slot records how far it sits from the slot its hash maps to
/// (its "probe distance"). On insertion, a candidate walking forward from its
/// home slot evicts any resident that is closer to its own home than the
/// candidate currently is ("rob from the rich"), which keeps probe distances
/// tightly bounded across the table. Lookups walk the same path and give up
/// as soon as their running distance exceeds the resident's stored distance,
/// so misses do not scan whole clusters. Removal back-shifts the entries
/// following the hole instead of leaving a tombstone.
///
/// ## Example
///
/// ```rust
/// # use std::hash::BuildHasher;
/// #
/// # use rh_hash::hash_table::HashTable;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # let hasher = foldhash::fast::RandomState::default();
/// let mut table = HashTable::new();
/// let hash = hasher.hash_one(123u64);
///
/// // Insert a person
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     rh_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     rh_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// ```
pub struct HashTable<V> {
    slots: Box<[Slot<V>]>,
    populated: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::ToString;

        f.debug_struct("HashTable")
            .field(
                "slots",
                &self
                    .slots
                    .iter()
                    .map(|slot| match slot {
                        Slot::Empty => ".".to_string(),
                        Slot::Occupied(bucket) => format!("d{}", bucket.dist),
                    })
                    .collect::<Vec<_>>(),
            )
            .field("populated", &self.populated)
            .field("capacity", &self.slots.len())
            .finish()
    }
}

impl<V> Clone for HashTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.iter().cloned().collect(),
            populated: self.populated,
        }
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates a new hash table with the minimum capacity (8 slots).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates a new hash table with at least the specified number of slots.
    ///
    /// The slot count is rounded up to the next power of two, with a minimum
    /// of 8. The table resizes once more than half of its slots are occupied,
    /// so a table with `capacity()` slots holds up to `capacity() / 2`
    /// entries before growing.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        let capacity = capacity.next_power_of_two().max(MIN_CAPACITY);

        Self {
            slots: empty_slots(capacity),
            populated: 0,
        }
    }

    /// Returns the number of slots in the table.
    ///
    /// Always a power of two. The table grows (doubling the slot count and
    /// rehashing every entry) whenever an insertion would leave more than
    /// half of the slots occupied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<i32> = HashTable::with_capacity(10);
    /// assert_eq!(table.capacity(), 16);
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<i32> = HashTable::new();
    /// assert!(table.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        // Slot count is a power of two, so `hash & (len - 1)` is `hash % len`.
        self.slots.len() - 1
    }

    #[inline(always)]
    fn home_index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask()
    }

    /// Removes all elements from the table.
    ///
    /// All values are dropped and the length resets to zero. The table
    /// retains its current capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::hash::BuildHasher;
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// # let hasher = foldhash::fast::RandomState::default();
    /// let mut table = HashTable::new();
    /// table.entry(hasher.hash_one(1u64), |&n: &u64| n == 1).or_insert(1);
    /// let capacity = table.capacity();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.populated = 0;
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// Grows to the smallest power-of-two slot count that keeps
    /// `self.len() + additional` entries at or below 50% load. Does nothing
    /// if the current capacity is already sufficient; the table never
    /// shrinks.
    ///
    /// # Panics
    ///
    /// Panics if the required slot count overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<i32> = HashTable::new();
    /// table.reserve(100);
    /// assert!(table.capacity() >= 200);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let required = self
            .populated
            .checked_add(additional)
            .and_then(|entries| entries.checked_mul(2))
            .and_then(usize::checked_next_power_of_two)
            .expect("capacity overflow");
        if required > self.slots.len() {
            self.rehash_into(required);
        }
    }

    /// Finds a value in the table by hash and equality predicate.
    ///
    /// Returns a reference to the value if found, or `None` if no matching
    /// value exists. This method does not modify the table and can be
    /// called on shared references.
    ///
    /// The scan starts at the hash's home slot and stops as soon as it
    /// reaches a slot whose resident is at least as close to its own home as
    /// the scan is long: past that point the Robin Hood invariant rules the
    /// key out. The returned reference is valid only until the next mutating
    /// call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::hash::BuildHasher;
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// # let hasher = foldhash::fast::RandomState::default();
    /// let mut table = HashTable::new();
    /// let hash = hasher.hash_one(42u64);
    /// table.entry(hash, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.find(hash, |&n| n == 42), Some(&42));
    /// let missing = hasher.hash_one(99u64);
    /// assert_eq!(table.find(missing, |&n| n == 99), None);
    /// ```
    #[inline]
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.find_index(hash, eq)?;
        Some(&self.bucket(index).value)
    }

    /// Finds a value in the table by hash and equality predicate, returning a
    /// mutable reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::hash::BuildHasher;
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// # let hasher = foldhash::fast::RandomState::default();
    /// let mut table = HashTable::new();
    /// let hash = hasher.hash_one(42u64);
    /// table.entry(hash, |&(k, _): &(u64, i32)| k == 42).or_insert((42, 0));
    ///
    /// if let Some((_, v)) = table.find_mut(hash, |&(k, _)| k == 42) {
    ///     *v = 7;
    /// }
    /// assert_eq!(table.find(hash, |&(k, _)| k == 42), Some(&(42, 7)));
    /// ```
    #[inline]
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.find_index(hash, eq)?;
        Some(&mut self.bucket_mut(index).value)
    }

    /// Removes and returns a value from the table.
    ///
    /// The value is identified by its hash and an equality predicate. If the
    /// value is found, it is removed and the entries following it are shifted
    /// one slot backward (each one step closer to its home) until an empty
    /// slot or an entry already at its home is reached. No tombstone is left
    /// behind, so lookups keep their early-termination guarantee.
    ///
    /// Removing an absent value is a no-op returning `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::hash::BuildHasher;
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// # let hasher = foldhash::fast::RandomState::default();
    /// let mut table = HashTable::new();
    /// let hash = hasher.hash_one(42u64);
    /// table.entry(hash, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(hash, |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(hash, |&n| n == 42), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.find_index(hash, eq)?;
        Some(self.remove_at(index))
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// This method returns an `Entry` enum that allows for efficient
    /// insertion or modification of values, covering patterns like "insert if
    /// not exists" or "update if exists" with a single probe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::hash::BuildHasher;
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// # let hasher = foldhash::fast::RandomState::default();
    /// let mut table = HashTable::new();
    /// let hash = hasher.hash_one("hello");
    ///
    /// match table.entry(hash, |s: &String| s == "hello") {
    ///     rh_hash::hash_table::Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     rh_hash::hash_table::Entry::Occupied(_) => unreachable!(),
    /// }
    /// assert_eq!(table.len(), 1);
    /// ```
    #[inline]
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.find_index(hash, eq) {
            Some(index) => Entry::Occupied(OccupiedEntry { table: self, index }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Returns an iterator over all values in the table, in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::hash::BuildHasher;
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// # let hasher = foldhash::fast::RandomState::default();
    /// let mut table = HashTable::new();
    /// for key in 0u64..4 {
    ///     table.entry(hasher.hash_one(key), |&n: &u64| n == key).or_insert(key);
    /// }
    ///
    /// assert_eq!(table.iter().count(), 4);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// After calling `drain()` the table is empty but retains its capacity.
    /// Values not consumed by the iterator are dropped with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::hash::BuildHasher;
    /// # use rh_hash::hash_table::HashTable;
    /// #
    /// # let hasher = foldhash::fast::RandomState::default();
    /// let mut table = HashTable::new();
    /// table.entry(hasher.hash_one(1u64), |&n: &u64| n == 1).or_insert(1);
    ///
    /// let values: Vec<u64> = table.drain().collect();
    /// assert!(table.is_empty());
    /// assert_eq!(values, vec![1]);
    /// ```
    pub fn drain(&mut self) -> Drain<V> {
        self.populated = 0;
        let capacity = self.slots.len();
        let old = mem::replace(&mut self.slots, empty_slots(capacity));
        Drain {
            inner: old.into_vec().into_iter(),
        }
    }

    /// Forward scan from the hash's home slot, using the probe-distance
    /// invariant for early termination.
    fn find_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        if self.populated == 0 {
            return None;
        }

        let mask = self.mask();
        let mut index = self.home_index(hash);
        let mut dist = 0usize;
        loop {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(bucket) => {
                    // A resident closer to its home than the scan is long
                    // means the key cannot sit at or past this slot: it would
                    // have evicted this resident on insertion.
                    if dist > bucket.dist {
                        return None;
                    }
                    if dist == bucket.dist && bucket.hash == hash && eq(&bucket.value) {
                        return Some(index);
                    }
                }
            }
            dist += 1;
            index = (index + 1) & mask;
        }
    }

    /// Robin Hood displacement walk. Places `bucket` (and transitively any
    /// entries it evicts) and returns the slot index where `bucket`'s value
    /// ended up.
    ///
    /// Pure placement: no growth check, no length bookkeeping, and no key
    /// equality test. Callers must have established that the value is absent
    /// and that the table has room (at most half full after this insertion),
    /// which also guarantees the walk terminates at an empty slot.
    fn insert_bucket(&mut self, mut bucket: Bucket<V>) -> usize {
        debug_assert!((self.populated + 1) * 2 <= self.slots.len());

        let mask = self.mask();
        let mut index = self.home_index(bucket.hash);
        let mut landed = None;
        loop {
            match &mut self.slots[index] {
                slot @ Slot::Empty => {
                    *slot = Slot::Occupied(bucket);
                    return landed.unwrap_or(index);
                }
                Slot::Occupied(resident) => {
                    if bucket.dist > resident.dist {
                        // Rob from the rich: the candidate is further from
                        // home than the resident, so the resident gives up
                        // its slot and continues the walk instead.
                        mem::swap(&mut bucket, resident);
                        landed.get_or_insert(index);
                    }
                    bucket.dist += 1;
                    index = (index + 1) & mask;
                }
            }
        }
    }

    /// Clears the slot at `index` and repairs the invariant by shifting the
    /// following entries backward until an empty slot or a distance-0 entry.
    fn remove_at(&mut self, index: usize) -> V {
        let Slot::Occupied(removed) = mem::replace(&mut self.slots[index], Slot::Empty) else {
            unreachable!("remove_at targets an occupied slot");
        };
        self.populated -= 1;

        let mask = self.mask();
        let mut hole = index;
        loop {
            let next = (hole + 1) & mask;
            match &mut self.slots[next] {
                Slot::Empty => break,
                Slot::Occupied(follower) => {
                    if follower.dist == 0 {
                        break;
                    }
                    follower.dist -= 1;
                }
            }
            self.slots.swap(hole, next);
            hole = next;
        }

        removed.value
    }

    #[cold]
    fn grow(&mut self) {
        self.rehash_into(self.slots.len() * 2);
    }

    /// Full rehash into a fresh slot array of `new_capacity` slots.
    ///
    /// The new array is allocated before any entry moves, so an allocation
    /// failure aborts here and leaves the table in its pre-growth state.
    /// Doubling a table at or below 50% load yields one at or below 25%, so
    /// the placement loop can never need another resize; the caller must
    /// uphold the capacity assertion below.
    fn rehash_into(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two());
        debug_assert!(self.populated * 2 <= new_capacity);

        let old = mem::replace(&mut self.slots, empty_slots(new_capacity));
        for slot in old.into_vec() {
            if let Slot::Occupied(bucket) = slot {
                self.insert_bucket(Bucket { dist: 0, ..bucket });
            }
        }
    }

    fn bucket(&self, index: usize) -> &Bucket<V> {
        match &self.slots[index] {
            Slot::Occupied(bucket) => bucket,
            Slot::Empty => unreachable!("index resolved to an occupied slot"),
        }
    }

    fn bucket_mut(&mut self, index: usize) -> &mut Bucket<V> {
        match &mut self.slots[index] {
            Slot::Occupied(bucket) => bucket,
            Slot::Empty => unreachable!("index resolved to an occupied slot"),
        }
    }
}

#[cfg(test)]
impl<V> HashTable<V> {
    /// Histogram of probe distances over all occupied slots.
    ///
    /// Test-only: compiled only with `cfg(test)`.
    fn probe_histogram(&self) -> Vec<usize> {
        let mut hist = Vec::new();
        for slot in self.slots.iter() {
            if let Slot::Occupied(bucket) = slot {
                if bucket.dist >= hist.len() {
                    hist.resize(bucket.dist + 1, 0);
                }
                hist[bucket.dist] += 1;
            }
        }
        hist
    }

    /// Checks every structural invariant of the table.
    ///
    /// Test-only: compiled only with `cfg(test)`.
    fn assert_invariants(&self) {
        assert!(self.slots.len().is_power_of_two());
        assert!(self.slots.len() >= MIN_CAPACITY);
        assert!(self.populated * 2 <= self.slots.len(), "load factor above 50%");

        let mask = self.mask();
        let mut occupied = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            let Slot::Occupied(bucket) = slot else {
                continue;
            };
            occupied += 1;

            // Stored distance matches the physical offset from home.
            let home = (bucket.hash as usize) & mask;
            assert_eq!(
                (home + bucket.dist) & mask,
                index,
                "distance does not match offset from home slot"
            );

            // An entry away from home must be preceded by an entry at least
            // as displaced, or lookups walking toward it would terminate
            // early.
            if bucket.dist > 0 {
                let prev = (index + mask) & mask;
                match &self.slots[prev] {
                    Slot::Empty => panic!("displaced entry preceded by an empty slot"),
                    Slot::Occupied(before) => {
                        assert!(before.dist + 1 >= bucket.dist, "probe order violated");
                    }
                }
            }
        }
        assert_eq!(occupied, self.populated);
    }
}

/// A view into a single slot of the table, which may be vacant or occupied.
///
/// Constructed by [`HashTable::entry`].
pub enum Entry<'a, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts the given value if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference to the value in the entry.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
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
}

/// A view into a vacant slot in the table.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts the value and returns a mutable reference to it.
    ///
    /// If the insertion would leave the table more than half full it grows
    /// first, then the Robin Hood displacement walk places the value. The
    /// returned reference is valid only until the next mutating call.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        if (table.populated + 1) * 2 > table.slots.len() {
            table.grow();
        }

        let index = table.insert_bucket(Bucket {
            hash: self.hash,
            dist: 0,
            value,
        });
        table.populated += 1;
        &mut table.bucket_mut(index).value
    }
}

/// A view into an occupied slot in the table.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.table.bucket(self.index).value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.bucket_mut(self.index).value
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.table.bucket_mut(self.index).value
    }

    /// Removes the entry from the table and returns the value, back-shifting
    /// the entries that followed it.
    pub fn remove(self) -> V {
        self.table.remove_at(self.index)
    }
}

/// An iterator over the values of a `HashTable`.
pub struct Iter<'a, V> {
    inner: core::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Slot::Occupied(bucket) => return Some(&bucket.value),
                Slot::Empty => {}
            }
        }
    }
}

/// A draining iterator over the values of a `HashTable`.
pub struct Drain<V> {
    inner: alloc::vec::IntoIter<Slot<V>>,
}

impl<V> Iterator for Drain<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Slot::Occupied(bucket) => return Some(bucket.value),
                Slot::Empty => {}
            }
        }
    }
}
