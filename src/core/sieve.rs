//! Prime sieve (Sieve of Eratosthenes).
//!
//! The sieve is recomputed wholesale whenever the integer bound changes;
//! there is no incremental update. For the bounds an interactive viewer
//! uses (a few thousand to a few hundred thousand points) a full resieve
//! is well under a millisecond.

/// The set of primes in `[2, limit]`, backed by a boolean flag array.
///
/// `n` is a member iff `n` has no divisor in `[2, ⌊√n⌋]`.
#[derive(Clone, Debug)]
pub struct PrimeSet {
    /// `flags[n]` is true iff `n` is prime; length `limit + 1` (or 0
    /// when `limit < 2`).
    flags: Vec<bool>,

    /// Cached number of primes
    count: usize,
}

impl PrimeSet {
    /// Sieve all primes up to and including `limit`.
    ///
    /// `limit < 2` yields the empty set.
    pub fn sieve(limit: u32) -> Self {
        if limit < 2 {
            return Self {
                flags: Vec::new(),
                count: 0,
            };
        }

        let n = limit as usize;
        let mut flags = vec![true; n + 1];
        flags[0] = false;
        flags[1] = false;

        let mut p = 2usize;
        while p * p <= n {
            if flags[p] {
                let mut m = p * p;
                while m <= n {
                    flags[m] = false;
                    m += p;
                }
            }
            p += 1;
        }

        let count = flags.iter().filter(|&&f| f).count();
        Self { flags, count }
    }

    /// Membership test. Integers beyond the sieved bound are not members.
    pub fn contains(&self, n: u32) -> bool {
        self.flags.get(n as usize).copied().unwrap_or(false)
    }

    /// Number of primes in the set.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Prime density `|primes| / n` for display; 0 when `n` is 0.
    pub fn density(&self, n: u32) -> f32 {
        if n == 0 {
            0.0
        } else {
            self.count as f32 / n as f32
        }
    }

    /// Iterate over the primes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(|(n, _)| n as u32)
    }
}
