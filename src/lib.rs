//! Jump consistent hash (Lamping & Veach, <https://arxiv.org/abs/1406.2294>).
//!
//! Maps a 64-bit key to one of `num_buckets` buckets in O(log n) time with
//! no memory overhead. Growing the bucket count from `n` to `n + 1` moves
//! only ~`1/(n+1)` of the keys, and every key that moves lands on the new
//! bucket `n` (contrast `key % n`, which reshuffles almost everything).
//!
//! The key is opaque: callers with string or composite identifiers must
//! reduce them to a `u64` with a well-distributed hash function first.
//!
//! ```
//! use jump_hash::bucket;
//!
//! let shard = bucket(10863919174838991, 11).unwrap();
//! assert!((0..11).contains(&shard));
//! ```

use thiserror::Error;

/// Error returned when `num_buckets` is zero.
///
/// The jump sequence never terminates for an empty range, so the only
/// invalid input is rejected up front instead of looping forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("num_buckets must be at least 1")]
pub struct InvalidArgument;

/// Assign `key` to a bucket in `[0, num_buckets)`.
///
/// Pure and stateless: identical arguments always produce identical
/// results, and the function is safe to call from any number of threads.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `num_buckets == 0`.
pub fn bucket(key: u64, num_buckets: u32) -> Result<i32, InvalidArgument> {
    if num_buckets == 0 {
        return Err(InvalidArgument);
    }
    Ok(jump(key, num_buckets))
}

/// Core jump sequence. Caller guarantees `num_buckets >= 1`, which also
/// guarantees the loop body runs at least once, so `b` is non-negative on
/// exit.
fn jump(mut key: u64, num_buckets: u32) -> i32 {
    let mut b: i64 = -1;
    let mut j: i64 = 0;
    while j < i64::from(num_buckets) {
        b = j;
        // LCG step; the multiplier and increment are fixed constants of
        // the algorithm. Wraps mod 2^64.
        key = key.wrapping_mul(2862933555777941757).wrapping_add(1);
        // The top 31 bits of the state pick the next candidate. The +1
        // keeps the divisor nonzero; the division must stay in f64 to
        // match the reference output bit-for-bit.
        j = ((b + 1) as f64 * (f64::from(1_u32 << 31) / ((key >> 33) + 1) as f64)) as i64;
    }
    b as i32
}
