//! A key-value map backed by the hopscotch [`HashTable`].
//!
//! `HashMap<K, V, S>` provides the standard map surface; the remaining type
//! parameters pick the growth policy, the per-bucket hash cache, the
//! overflow store, and the neighborhood width. [`SortedHashMap`] is the
//! variant whose overflow entries stay ordered by key.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::ops::Index;

use equivalent::Equivalent;

use crate::DefaultHashBuilder;
use crate::bucket::HashCache;
use crate::bucket::NoStoredHash;
use crate::growth::CapacityError;
use crate::growth::GrowthPolicy;
use crate::growth::PowerOfTwoGrowth;
use crate::hash_table;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;
use crate::overflow::Compare;
use crate::overflow::ListOverflow;
use crate::overflow::Overflow;
use crate::overflow::SortedOverflow;

/// Orders map entries by key; the ordering parameter of [`SortedHashMap`].
#[derive(Clone, Copy, Default, Debug)]
pub struct ByKey;

impl<K: Ord, V> Compare<(K, V)> for ByKey {
    #[inline(always)]
    fn compare(&self, a: &(K, V), b: &(K, V)) -> Ordering {
        a.0.cmp(&b.0)
    }
}

/// A hopscotch map whose overflow store keeps entries sorted by key.
///
/// Identical to [`HashMap`] except that the overflow phase of iteration
/// yields entries in ascending key order. Requires `K: Ord`.
pub type SortedHashMap<K, V, S = DefaultHashBuilder> =
    HashMap<K, V, S, PowerOfTwoGrowth, NoStoredHash, SortedOverflow<(K, V), ByKey>, 62>;

/// A hash map implemented with hopscotch hashing.
///
/// Keys implement `Hash + Eq`; the hasher builder `S` defaults to
/// [`DefaultHashBuilder`]. Lookups accept any borrowed form of the key
/// through the [`Equivalent`] trait, and every lookup has a `*_with_hash`
/// twin taking a precomputed hash.
///
/// # Examples
///
/// ```rust
/// use hopscotch_map::HashMap;
///
/// let mut book_reviews = HashMap::new();
/// book_reviews.insert("Grimms' Fairy Tales", "Masterpiece.");
/// book_reviews.insert("Pride and Prejudice", "Very enjoyable.");
///
/// assert_eq!(book_reviews.len(), 2);
/// assert!(book_reviews.contains_key("Pride and Prejudice"));
/// ```
#[derive(Clone)]
pub struct HashMap<
    K,
    V,
    S = DefaultHashBuilder,
    G = PowerOfTwoGrowth,
    B = NoStoredHash,
    O = ListOverflow<(K, V)>,
    const H: usize = 62,
> {
    table: HashTable<(K, V), G, B, O, H>,
    hash_builder: S,
}

impl<K, V> HashMap<K, V> {
    /// Creates an empty map with the default hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
            hash_builder: DefaultHashBuilder::default(),
        }
    }

    /// Creates an empty map that can hold `capacity` entries without
    /// resizing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let map: HashMap<i32, String> = HashMap::with_capacity(100);
    /// assert!(map.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder: DefaultHashBuilder::default(),
        }
    }
}

impl<K, V, S, G, B, O, const H: usize> HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    /// Creates an empty map with the given hasher builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty map with the given capacity and hasher builder.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of entries the map can hold before resizing.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Number of buckets a hash can map to.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Largest bucket count the growth policy can represent.
    pub fn max_bucket_count(&self) -> usize {
        self.table.max_bucket_count()
    }

    /// Number of entries living in the overflow store. Non-zero only under
    /// badly colliding hash functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.overflow_len(), 0);
    /// ```
    pub fn overflow_len(&self) -> usize {
        self.table.overflow_len()
    }

    /// Current load factor.
    pub fn load_factor(&self) -> f32 {
        self.table.load_factor()
    }

    /// The load factor above which insertion resizes, default 0.95.
    pub fn max_load_factor(&self) -> f32 {
        self.table.max_load_factor()
    }

    /// Sets the maximum load factor, clamped to `[0.1, 0.95]`.
    pub fn set_max_load_factor(&mut self, max_load_factor: f32) {
        self.table.set_max_load_factor(max_load_factor);
    }

    /// How many overflow entries are tolerated before a failed placement
    /// prefers growing the table.
    pub fn overflow_threshold(&self) -> usize {
        self.table.overflow_threshold()
    }

    /// Sets the overflow-pressure threshold.
    pub fn set_overflow_threshold(&mut self, threshold: usize) {
        self.table.set_overflow_threshold(threshold);
    }

    /// The map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes all entries, keeping the allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Reserves capacity for at least `additional` more entries.
    ///
    /// # Panics
    ///
    /// Panics with `"capacity overflow"` when the growth policy cannot
    /// represent the required capacity.
    pub fn reserve(&mut self, additional: usize) {
        let hash_builder = &self.hash_builder;
        self.table
            .reserve(additional, |(key, _)| hash_builder.hash_one(key));
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map: HashMap<i32, i32> = HashMap::new();
    /// assert!(map.try_reserve(1000).is_ok());
    /// assert!(map.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), CapacityError> {
        let hash_builder = &self.hash_builder;
        self.table
            .try_reserve(additional, |(key, _)| hash_builder.hash_one(key))
    }

    /// Rehashes into at least `min_bucket_count` buckets.
    pub fn rehash(&mut self, min_bucket_count: usize) {
        let hash_builder = &self.hash_builder;
        self.table
            .rehash(min_bucket_count, |(key, _)| hash_builder.hash_one(key));
    }

    /// Shrinks the map's storage to fit the current entries.
    pub fn shrink_to_fit(&mut self) {
        let hash_builder = &self.hash_builder;
        self.table
            .shrink_to_fit(|(key, _)| hash_builder.hash_one(key));
    }

    /// Returns a reference to the value for `key`.
    ///
    /// The key may be any type equivalent to (and hashing like) the stored
    /// key; see [`Equivalent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(String::from("one"), 1);
    /// assert_eq!(map.get("one"), Some(&1));
    /// assert_eq!(map.get("two"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.get_with_hash(key, hash)
    }

    /// [`get`](Self::get) with a caller-supplied hash.
    ///
    /// The hash decides which neighborhood is probed, so passing the wrong
    /// hash reports a miss even for a present key.
    pub fn get_with_hash<Q>(&self, key: &Q, hash: u64) -> Option<&V>
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.table
            .find(hash, |(k, _)| key.equivalent(k))
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// if let Some(v) = map.get_mut(&1) {
    ///     *v = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.get_mut_with_hash(key, hash)
    }

    /// [`get_mut`](Self::get_mut) with a caller-supplied hash.
    pub fn get_mut_with_hash<Q>(&mut self, key: &Q, hash: u64) -> Option<&mut V>
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.table
            .find_mut(hash, |(k, _)| key.equivalent(k))
            .map(|(_, v)| v)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.get_key_value_with_hash(key, hash)
    }

    /// [`get_key_value`](Self::get_key_value) with a caller-supplied hash.
    pub fn get_key_value_with_hash<Q>(&self, key: &Q, hash: u64) -> Option<(&K, &V)>
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.table
            .find(hash, |(k, _)| key.equivalent(k))
            .map(|(k, v)| (k, v))
    }

    /// True when the map contains `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// [`contains_key`](Self::contains_key) with a caller-supplied hash.
    pub fn contains_key_with_hash<Q>(&self, key: &Q, hash: u64) -> bool
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.get_with_hash(key, hash).is_some()
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was present (its key is not replaced).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        let hash_builder = &self.hash_builder;
        match self
            .table
            .entry(hash, |(k, _)| k == &key, |(k, _)| hash_builder.hash_one(k))
        {
            TableEntry::Occupied(mut entry) => {
                Some(core::mem::replace(&mut entry.get_mut().1, value))
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Inserts only when the key is absent; an occupied key is reported
    /// back together with the rejected value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(*map.try_insert(10, "ten").unwrap(), "ten");
    ///
    /// let err = map.try_insert(10, "TEN").unwrap_err();
    /// assert_eq!(err.value, "TEN");
    /// assert_eq!(*err.entry.get(), "ten");
    /// ```
    pub fn try_insert(
        &mut self,
        key: K,
        value: V,
    ) -> Result<&mut V, OccupiedError<'_, K, V, G, B, O, H>> {
        match self.entry(key) {
            Entry::Occupied(entry) => Err(OccupiedError { entry, value }),
            Entry::Vacant(entry) => Ok(entry.insert(value)),
        }
    }

    /// Removes a key, returning its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.remove_with_hash(key, hash)
    }

    /// [`remove`](Self::remove) with a caller-supplied hash.
    pub fn remove_with_hash<Q>(&mut self, key: &Q, hash: u64) -> Option<V>
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.table
            .remove(hash, |(k, _)| key.equivalent(k))
            .map(|(_, v)| v)
    }

    /// Removes a key, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| key.equivalent(k))
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// Resolving a vacant entry reserves its slot but constructs nothing:
    /// `entry(k).or_insert_with(f)` only runs `f` when the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut letters = HashMap::new();
    /// for ch in "a short treatise on fungi".chars() {
    ///     *letters.entry(ch).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(letters[&'t'], 3);
    /// assert_eq!(letters.get(&'y'), None);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, G, B, O, H> {
        let hash = self.hash_builder.hash_one(&key);
        let hash_builder = &self.hash_builder;
        match self
            .table
            .entry(hash, |(k, _)| k == &key, |(k, _)| hash_builder.hash_one(k))
        {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Keeps only the entries the predicate approves of.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map: HashMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert_eq!(map.len(), 4);
    /// ```
    pub fn retain(&mut self, mut keep: impl FnMut(&K, &mut V) -> bool) {
        self.table.retain(|entry| {
            let (key, value) = entry;
            keep(key, value)
        });
    }

    /// Iterates over `(&K, &V)` pairs in arbitrary order (the overflow
    /// store's order applies to its phase of the walk).
    pub fn iter(&self) -> Iter<'_, K, V, B> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Iterates over `(&K, &mut V)` pairs. Keys stay shared: mutating a key
    /// would strand its entry in the wrong bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map: HashMap<i32, i32> = (0..3).map(|x| (x, x)).collect();
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(map[&2], 20);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, B> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> Keys<'_, K, V, B> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the values.
    pub fn values(&self) -> Values<'_, K, V, B> {
        Values { inner: self.iter() }
    }

    /// Iterates over the values mutably.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, B> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Removes and yields every entry; the map is left empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let drained: Vec<_> = map.drain().collect();
    /// assert!(map.is_empty());
    /// assert_eq!(drained.len(), 2);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V, B> {
        Drain {
            inner: self.table.drain(),
        }
    }
}

impl<K, V, S, G, B, O, const H: usize> Default for HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S, G, B, O, const H: usize> Debug for HashMap<K, V, S, G, B, O, H>
where
    K: Debug + Hash + Eq,
    V: Debug,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, G, B, O, const H: usize> PartialEq for HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| *value == *v))
    }
}

impl<K, V, S, G, B, O, const H: usize> Eq for HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
}

impl<K, V, Q, S, G, B, O, const H: usize> Index<&Q> for HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    Q: Hash + Equivalent<K> + ?Sized,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics when the key is absent.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S, G, B, O, const H: usize> Extend<(K, V)> for HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S, G, B, O, const H: usize> FromIterator<(K, V)> for HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for HashMap<K, V>
where
    K: Hash + Eq,
{
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let map = HashMap::from([(1, 2), (3, 4)]);
    /// assert_eq!(map[&3], 4);
    /// ```
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_iter(entries)
    }
}

/// Error returned by [`HashMap::try_insert`] when the key is occupied.
pub struct OccupiedError<'a, K, V, G, B, O, const H: usize> {
    /// The occupied entry that blocked the insertion.
    pub entry: OccupiedEntry<'a, K, V, G, B, O, H>,
    /// The value that was not inserted.
    pub value: V,
}

impl<K, V, G, B, O, const H: usize> Debug for OccupiedError<'_, K, V, G, B, O, H>
where
    K: Debug,
    V: Debug,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OccupiedError")
            .field("key", self.entry.key())
            .field("old_value", self.entry.get())
            .field("new_value", &self.value)
            .finish()
    }
}

/// A view into a single map entry, occupied or vacant.
///
/// Constructed by [`HashMap::entry`].
pub enum Entry<'a, K, V, G, B, O, const H: usize> {
    /// The key is present.
    Occupied(OccupiedEntry<'a, K, V, G, B, O, H>),
    /// The key is absent.
    Vacant(VacantEntry<'a, K, V, G, B, O, H>),
}

impl<'a, K, V, G, B, O, const H: usize> Entry<'a, K, V, G, B, O, H>
where
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    /// Returns the value, inserting `default` first when vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Returns the value, inserting the closure's result first when vacant.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Like [`or_insert_with`](Self::or_insert_with), with access to the key.
    pub fn or_insert_with_key(self, default: impl FnOnce(&K) -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Mutates the value in place when present, then returns the entry.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// The entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V, G, B, O, const H: usize> Entry<'a, K, V, G, B, O, H>
where
    V: Default,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    /// Returns the value, inserting `V::default()` first when vacant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopscotch_map::HashMap;
    ///
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    /// *map.entry("poneyland").or_default() += 1;
    /// assert_eq!(map["poneyland"], 1);
    /// ```
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant map entry.
pub struct VacantEntry<'a, K, V, G, B, O, const H: usize> {
    entry: hash_table::VacantEntry<'a, (K, V), G, B, O, H>,
    key: K,
}

impl<'a, K, V, G, B, O, const H: usize> VacantEntry<'a, K, V, G, B, O, H>
where
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    /// The key that would be inserted.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts a value, returning a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied map entry.
pub struct OccupiedEntry<'a, K, V, G, B, O, const H: usize> {
    entry: hash_table::OccupiedEntry<'a, (K, V), G, B, O, H>,
}

impl<'a, K, V, G, B, O, const H: usize> OccupiedEntry<'a, K, V, G, B, O, H>
where
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    /// The stored key.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// The stored value.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// The stored value, mutably.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts into a mutable reference bound to the map's borrow.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Replaces the value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry, returning the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry, returning the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

fn split_entry<K, V>(entry: &mut (K, V)) -> (&K, &mut V) {
    (&entry.0, &mut entry.1)
}

/// Iterator over `(&K, &V)`; see [`HashMap::iter`].
pub struct Iter<'a, K, V, B> {
    inner: hash_table::Iter<'a, (K, V), B>,
}

impl<K, V, B> Clone for Iter<'_, K, V, B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V, B: HashCache> Iterator for Iter<'a, K, V, B> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: HashCache> ExactSizeIterator for Iter<'_, K, V, B> {}
impl<K, V, B: HashCache> FusedIterator for Iter<'_, K, V, B> {}

/// Iterator over `(&K, &mut V)`; see [`HashMap::iter_mut`].
pub struct IterMut<'a, K, V, B> {
    inner: hash_table::IterMut<'a, (K, V), B>,
}

impl<'a, K, V, B: HashCache> Iterator for IterMut<'a, K, V, B> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(split_entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: HashCache> ExactSizeIterator for IterMut<'_, K, V, B> {}
impl<K, V, B: HashCache> FusedIterator for IterMut<'_, K, V, B> {}

/// Iterator over `&K`; see [`HashMap::keys`].
pub struct Keys<'a, K, V, B> {
    inner: Iter<'a, K, V, B>,
}

impl<'a, K, V, B: HashCache> Iterator for Keys<'a, K, V, B> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: HashCache> ExactSizeIterator for Keys<'_, K, V, B> {}
impl<K, V, B: HashCache> FusedIterator for Keys<'_, K, V, B> {}

/// Iterator over `&V`; see [`HashMap::values`].
pub struct Values<'a, K, V, B> {
    inner: Iter<'a, K, V, B>,
}

impl<'a, K, V, B: HashCache> Iterator for Values<'a, K, V, B> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: HashCache> ExactSizeIterator for Values<'_, K, V, B> {}
impl<K, V, B: HashCache> FusedIterator for Values<'_, K, V, B> {}

/// Iterator over `&mut V`; see [`HashMap::values_mut`].
pub struct ValuesMut<'a, K, V, B> {
    inner: IterMut<'a, K, V, B>,
}

impl<'a, K, V, B: HashCache> Iterator for ValuesMut<'a, K, V, B> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: HashCache> ExactSizeIterator for ValuesMut<'_, K, V, B> {}
impl<K, V, B: HashCache> FusedIterator for ValuesMut<'_, K, V, B> {}

/// Draining iterator over `(K, V)`; see [`HashMap::drain`].
pub struct Drain<'a, K, V, B> {
    inner: hash_table::Drain<'a, (K, V), B>,
}

impl<K, V, B: HashCache> Iterator for Drain<'_, K, V, B> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: HashCache> ExactSizeIterator for Drain<'_, K, V, B> {}
impl<K, V, B: HashCache> FusedIterator for Drain<'_, K, V, B> {}

/// Owning iterator over `(K, V)`.
pub struct IntoIter<K, V, B> {
    inner: hash_table::IntoIter<(K, V), B>,
}

impl<K, V, B: HashCache> Iterator for IntoIter<K, V, B> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: HashCache> ExactSizeIterator for IntoIter<K, V, B> {}
impl<K, V, B: HashCache> FusedIterator for IntoIter<K, V, B> {}

impl<'a, K, V, S, G, B, O, const H: usize> IntoIterator for &'a HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, B>;

    fn into_iter(self) -> Iter<'a, K, V, B> {
        self.iter()
    }
}

impl<'a, K, V, S, G, B, O, const H: usize> IntoIterator for &'a mut HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V, B>;

    fn into_iter(self) -> IterMut<'a, K, V, B> {
        self.iter_mut()
    }
}

impl<K, V, S, G, B, O, const H: usize> IntoIterator for HashMap<K, V, S, G, B, O, H>
where
    K: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
    B: HashCache,
    O: Overflow<(K, V)>,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, B>;

    fn into_iter(self) -> IntoIter<K, V, B> {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}
