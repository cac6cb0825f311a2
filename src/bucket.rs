//! The per-slot bucket cell.
//!
//! A bucket packs three things into a fixed-size cell: the occupancy flag
//! (bit 63 of the `hop` word), the neighborhood bitmap (bits `0..H`), and
//! uninitialized storage for one entry. Bit `i` of bucket `b`'s bitmap means
//! "the entry at slot `b + i` belongs to `b`" — the slot's own occupancy says
//! nothing about ownership, only the home bucket's bitmap does.
//!
//! An optional fourth field caches a truncated copy of the entry's hash,
//! selected at compile time through the [`HashCache`] parameter.

use core::mem::MaybeUninit;

const OCCUPIED: u64 = 1 << 63;

/// Compile-time selector for per-bucket hash caching.
///
/// [`StoredHash`] keeps the low 32 bits of each entry's hash next to the
/// entry; the table compares them before running the key-equality function
/// and, under a mask-based growth policy, reuses them during rehash instead
/// of re-hashing every key (low bits are exactly what a mask consumes).
/// [`NoStoredHash`] is a zero-sized no-op.
pub trait HashCache: Copy + Default {
    /// Whether a hash is actually cached.
    const STORED: bool;

    /// Capture the cache for an entry with the given hash.
    fn remember(hash: u64) -> Self;

    /// False only when a cached hash is present and differs from `hash`.
    ///
    /// A `true` result still requires a key comparison; the cache only
    /// filters out definite mismatches.
    fn probably_equal(&self, hash: u64) -> bool;

    /// The cached bits, zero-extended. Meaningful only when `STORED`.
    fn bits(&self) -> u64;

    /// Whether the cached bits can re-derive bucket indices for a table of
    /// `capacity` buckets.
    fn reusable_for(capacity: usize) -> bool;
}

/// Cache the truncated hash in every bucket.
#[derive(Clone, Copy, Default, Debug)]
pub struct StoredHash(u32);

impl HashCache for StoredHash {
    const STORED: bool = true;

    #[inline(always)]
    fn remember(hash: u64) -> Self {
        StoredHash(hash as u32)
    }

    #[inline(always)]
    fn probably_equal(&self, hash: u64) -> bool {
        self.0 == hash as u32
    }

    #[inline(always)]
    fn bits(&self) -> u64 {
        self.0 as u64
    }

    #[inline(always)]
    fn reusable_for(capacity: usize) -> bool {
        capacity.saturating_sub(1) <= u32::MAX as usize
    }
}

/// Do not cache hashes; every collision probe runs the equality function.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoStoredHash;

impl HashCache for NoStoredHash {
    const STORED: bool = false;

    #[inline(always)]
    fn remember(_hash: u64) -> Self {
        NoStoredHash
    }

    #[inline(always)]
    fn probably_equal(&self, _hash: u64) -> bool {
        true
    }

    #[inline(always)]
    fn bits(&self) -> u64 {
        0
    }

    #[inline(always)]
    fn reusable_for(_capacity: usize) -> bool {
        false
    }
}

pub(crate) struct Bucket<T, B> {
    hop: u64,
    cache: B,
    slot: MaybeUninit<T>,
}

impl<T, B: HashCache> Bucket<T, B> {
    pub(crate) fn empty() -> Self {
        Self {
            hop: 0,
            cache: B::default(),
            slot: MaybeUninit::uninit(),
        }
    }

    #[inline(always)]
    pub(crate) fn is_occupied(&self) -> bool {
        self.hop & OCCUPIED != 0
    }

    /// The neighborhood bitmap: bit `i` set means slot `self + i` holds an
    /// entry whose home bucket is this one.
    #[inline(always)]
    pub(crate) fn owners(&self) -> u64 {
        self.hop & !OCCUPIED
    }

    #[inline(always)]
    pub(crate) fn has_owner_at(&self, offset: usize) -> bool {
        debug_assert!(offset < 63);
        self.hop & (1 << offset) != 0
    }

    #[inline(always)]
    pub(crate) fn set_owner(&mut self, offset: usize) {
        debug_assert!(offset < 63);
        debug_assert!(!self.has_owner_at(offset));
        self.hop |= 1 << offset;
    }

    #[inline(always)]
    pub(crate) fn clear_owner(&mut self, offset: usize) {
        debug_assert!(self.has_owner_at(offset));
        self.hop &= !(1 << offset);
    }

    /// Place an entry into this bucket's storage and mark it occupied.
    #[inline(always)]
    pub(crate) fn install(&mut self, value: T, hash: u64) {
        debug_assert!(!self.is_occupied());
        self.slot.write(value);
        self.cache = B::remember(hash);
        self.hop |= OCCUPIED;
    }

    /// Place an entry moved from another bucket, carrying its cache along.
    #[inline(always)]
    pub(crate) fn install_relocated(&mut self, value: T, cache: B) {
        debug_assert!(!self.is_occupied());
        self.slot.write(value);
        self.cache = cache;
        self.hop |= OCCUPIED;
    }

    #[inline(always)]
    pub(crate) fn cache_matches(&self, hash: u64) -> bool {
        self.cache.probably_equal(hash)
    }

    #[inline(always)]
    pub(crate) fn cached_bits(&self) -> u64 {
        self.cache.bits()
    }

    /// # Safety
    ///
    /// The bucket must be occupied.
    #[inline(always)]
    pub(crate) unsafe fn value(&self) -> &T {
        debug_assert!(self.is_occupied());
        // SAFETY: the caller guarantees occupancy, and the occupancy bit is
        // only set while the slot holds an initialized value.
        unsafe { self.slot.assume_init_ref() }
    }

    /// # Safety
    ///
    /// The bucket must be occupied.
    #[inline(always)]
    pub(crate) unsafe fn value_mut(&mut self) -> &mut T {
        debug_assert!(self.is_occupied());
        // SAFETY: see `value`.
        unsafe { self.slot.assume_init_mut() }
    }

    /// Move the entry out and mark the bucket empty. The stale cache is
    /// overwritten by the next `install`.
    ///
    /// # Safety
    ///
    /// The bucket must be occupied.
    #[inline(always)]
    pub(crate) unsafe fn evict(&mut self) -> T {
        debug_assert!(self.is_occupied());
        self.hop &= !OCCUPIED;
        // SAFETY: the caller guarantees occupancy; clearing the flag first
        // means a drop of this bucket can never double-drop the value.
        unsafe { self.slot.assume_init_read() }
    }

    /// Like `evict`, but also hands back the cache for relocation.
    ///
    /// # Safety
    ///
    /// The bucket must be occupied.
    #[inline(always)]
    pub(crate) unsafe fn take(&mut self) -> (T, B) {
        let cache = self.cache;
        // SAFETY: forwarded from the caller.
        (unsafe { self.evict() }, cache)
    }

    /// Drop the entry (if any) and reset the bitmap.
    pub(crate) fn reset(&mut self) {
        let occupied = self.is_occupied();
        self.hop = 0;
        if occupied {
            // SAFETY: the flag was set, so the slot is initialized; it was
            // cleared above, so a panicking `T::drop` cannot double-drop.
            unsafe { self.slot.assume_init_drop() };
        }
    }

    /// Consume the bucket, yielding the entry if it was occupied.
    pub(crate) fn into_value(mut self) -> Option<T> {
        if self.is_occupied() {
            self.hop &= !OCCUPIED;
            // SAFETY: the flag was set, so the slot is initialized; it was
            // cleared above, so dropping `self` will not touch the slot.
            Some(unsafe { self.slot.assume_init_read() })
        } else {
            None
        }
    }
}

impl<T, B> Drop for Bucket<T, B> {
    fn drop(&mut self) {
        if core::mem::needs_drop::<T>() && self.hop & OCCUPIED != 0 {
            // SAFETY: the occupancy bit is only set while the slot holds an
            // initialized value.
            unsafe { self.slot.assume_init_drop() };
        }
    }
}

impl<T: Clone, B: Clone> Clone for Bucket<T, B> {
    fn clone(&self) -> Self {
        Self {
            hop: self.hop,
            cache: self.cache.clone(),
            slot: if self.hop & OCCUPIED != 0 {
                // SAFETY: occupied buckets hold initialized values.
                MaybeUninit::new(unsafe { self.slot.assume_init_ref() }.clone())
            } else {
                MaybeUninit::uninit()
            },
        }
    }
}
