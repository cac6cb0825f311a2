//! Growth policies: how hashes map to bucket indices and how the table grows.
//!
//! A policy owns the current bucket capacity `C` and two operations on it:
//! translating a 64-bit hash into an index in `[0, C)`, and producing the
//! policy for the next capacity when the table must grow. Policies are plain
//! `Copy` values; the table swaps them wholesale on rehash.
//!
//! Three policies are provided. [`PowerOfTwoGrowth`] masks the low bits of
//! the hash and is the default; [`PrimeGrowth`] walks a fixed prime table
//! and dispatches `hash % prime` through a per-prime function pointer so the
//! hot path never executes a division by a runtime value; [`ModuloGrowth`]
//! grows by an arbitrary ratio and pays for the memory granularity with a
//! general modulo per lookup.

use cfg_if::cfg_if;

/// Error returned when a growth policy cannot represent a requested capacity.
///
/// Surfaced by the `try_` variants of reserving operations; the infallible
/// variants translate it into a `"capacity overflow"` panic.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct CapacityError;

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("requested capacity exceeds the growth policy's maximum")
    }
}

impl core::error::Error for CapacityError {}

/// Maps hashes to bucket indices and advises the next capacity on resize.
///
/// `capacity` reports the current bucket count `C`; `index_for` must return
/// an index in `[0, C)` and may only be called while `C` is non-zero.
pub trait GrowthPolicy: Clone {
    /// True when `index_for` consumes only the low bits of the hash, so a
    /// truncated stored hash re-derives the same index after a rehash as the
    /// full hash would (as long as the capacity fits in the truncated width).
    const KEEPS_LOW_BITS: bool;

    /// Smallest representable capacity of at least `min_capacity` buckets.
    fn new(min_capacity: usize) -> Result<Self, CapacityError>;

    /// The current bucket count.
    fn capacity(&self) -> usize;

    /// The bucket index for `hash`, in `[0, capacity)`.
    fn index_for(&self, hash: u64) -> usize;

    /// The policy for the next capacity step.
    fn next(&self) -> Result<Self, CapacityError>;

    /// The largest capacity this policy can represent.
    fn max_capacity() -> usize;
}

/// Power-of-two capacities; `index_for` is a single mask operation.
///
/// `FACTOR` is the multiplier applied on growth and must itself be a power
/// of two so capacities stay mask-friendly. Capacities are capped at
/// `usize::MAX / 2` rounded down to a power of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerOfTwoGrowth<const FACTOR: usize = 2> {
    capacity: usize,
}

impl<const FACTOR: usize> PowerOfTwoGrowth<FACTOR> {
    const FACTOR_OK: () = assert!(
        FACTOR.is_power_of_two() && FACTOR >= 2,
        "growth factor must be a power of two and at least 2",
    );

    const MAX: usize = 1 << (usize::BITS - 2);
}

impl<const FACTOR: usize> GrowthPolicy for PowerOfTwoGrowth<FACTOR> {
    const KEEPS_LOW_BITS: bool = true;

    fn new(min_capacity: usize) -> Result<Self, CapacityError> {
        let () = Self::FACTOR_OK;
        if min_capacity == 0 {
            return Ok(Self { capacity: 0 });
        }
        if min_capacity > Self::MAX {
            return Err(CapacityError);
        }
        Ok(Self {
            capacity: min_capacity.next_power_of_two(),
        })
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn index_for(&self, hash: u64) -> usize {
        debug_assert!(self.capacity.is_power_of_two());
        (hash as usize) & (self.capacity - 1)
    }

    fn next(&self) -> Result<Self, CapacityError> {
        let capacity = self
            .capacity
            .max(1)
            .checked_mul(FACTOR)
            .filter(|&c| c <= Self::MAX)
            .ok_or(CapacityError)?;
        Ok(Self { capacity })
    }

    fn max_capacity() -> usize {
        Self::MAX
    }
}

macro_rules! prime_table {
    ($($prime:literal),+ $(,)?) => {
        const PRIMES: &[usize] = &[$($prime),+];

        // One monomorphized `hash % PRIME` per table entry. The compiler
        // lowers each constant modulo to multiply/shift, so prime indexing
        // costs the same as the strength-reduced division rather than a
        // general 64-bit `div`.
        static PRIME_MODS: &[fn(u64) -> usize] = &[$(|hash| (hash % $prime) as usize),+];
    };
}

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        prime_table!(
            5, 17, 29, 53, 97, 193, 389, 769, 1543, 3079, 6151, 12289, 24593,
            49157, 98317, 196613, 393241, 786433, 1572869, 3145739, 6291469,
            12582917, 25165843, 50331653, 100663319, 201326611, 402653189,
            805306457, 1610612741, 3221225473, 6442450967, 12884901947,
            25769803897, 51539607551, 103079215111, 206158430209,
            412316860441, 824633720831, 1649267441651, 3298534883309,
            6597069766657, 13194139533299, 26388279066623, 52776558133303,
            105553116266489, 211106232532969, 422212465066001,
            844424930131963, 1688849860263953, 3377699720527861,
            6755399441055731, 13510798882111483, 27021597764222939,
            54043195528445957, 108086391056891903, 216172782113783843,
            432345564227567621, 864691128455135207, 1729382256910270481,
            3458764513820540933,
        );
    } else {
        prime_table!(
            5, 17, 29, 53, 97, 193, 389, 769, 1543, 3079, 6151, 12289, 24593,
            49157, 98317, 196613, 393241, 786433, 1572869, 3145739, 6291469,
            12582917, 25165843, 50331653, 100663319, 201326611, 402653189,
            805306457, 1610612741, 3221225473,
        );
    }
}

/// Capacities drawn from a fixed table of primes.
///
/// `index_for` dispatches through a precomputed table of per-prime modulo
/// routines. Growth advances one table entry at a time; requests beyond the
/// last prime fail with [`CapacityError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeGrowth {
    index: usize,
}

impl GrowthPolicy for PrimeGrowth {
    const KEEPS_LOW_BITS: bool = false;

    fn new(min_capacity: usize) -> Result<Self, CapacityError> {
        let index = PRIMES.partition_point(|&p| p < min_capacity);
        if index == PRIMES.len() {
            return Err(CapacityError);
        }
        Ok(Self { index })
    }

    fn capacity(&self) -> usize {
        PRIMES[self.index]
    }

    #[inline(always)]
    fn index_for(&self, hash: u64) -> usize {
        PRIME_MODS[self.index](hash)
    }

    fn next(&self) -> Result<Self, CapacityError> {
        if self.index + 1 == PRIMES.len() {
            return Err(CapacityError);
        }
        Ok(Self {
            index: self.index + 1,
        })
    }

    fn max_capacity() -> usize {
        PRIMES[PRIMES.len() - 1]
    }
}

/// Arbitrary capacities advancing by the ratio `NUM / DEN`.
///
/// Capacity is exactly what was asked for (no rounding), which gives the
/// finest memory granularity of the three policies, and `index_for` pays for
/// it with a general `hash % capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuloGrowth<const NUM: usize = 2, const DEN: usize = 1> {
    capacity: usize,
}

impl<const NUM: usize, const DEN: usize> ModuloGrowth<NUM, DEN> {
    const RATIO_OK: () = assert!(DEN > 0 && NUM > DEN, "growth ratio must be greater than one");
}

impl<const NUM: usize, const DEN: usize> GrowthPolicy for ModuloGrowth<NUM, DEN> {
    const KEEPS_LOW_BITS: bool = false;

    fn new(min_capacity: usize) -> Result<Self, CapacityError> {
        let () = Self::RATIO_OK;
        Ok(Self {
            capacity: min_capacity,
        })
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn index_for(&self, hash: u64) -> usize {
        debug_assert!(self.capacity > 0);
        (hash % self.capacity as u64) as usize
    }

    fn next(&self) -> Result<Self, CapacityError> {
        let grown = (self.capacity as u128 * NUM as u128)
            .div_ceil(DEN as u128)
            .max(self.capacity as u128 + 1);
        if grown > usize::MAX as u128 {
            return Err(CapacityError);
        }
        Ok(Self {
            capacity: grown as usize,
        })
    }

    fn max_capacity() -> usize {
        usize::MAX
    }
}
