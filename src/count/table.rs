use log::debug;

use crate::config::TableConfig;
use crate::count::bucket::{Bucket, MAX_KEY_LEN};
use crate::count::hash::hash;
use crate::error::{FreqTabError, FreqTabResult};

pub type SlotId = usize;

/// Upper bound on the probe sequence walked for one key before insertion
/// gives up.
pub const PROBE_LIMIT: usize = 64;

/// Fixed-capacity open-addressing table mapping byte-string keys to
/// occurrence counts.
///
/// Every key owns exactly one slot for the lifetime of the table. Lookup
/// starts at `hash(key) % capacity` and walks a signed quadratic probe
/// sequence (offsets 0, 0, +1, -1, +4, -4, ... up to +/-31^2), wrapping
/// indices into range with Euclidean remainder. The table never grows and
/// never rehashes; once the probe window around a home slot is saturated,
/// insertion of a new key fails with [`FreqTabError::InsertionExhausted`].
#[derive(Debug)]
pub struct FrequencyTable {
    buckets: Vec<Bucket>,
    occupied: usize,
}

impl FrequencyTable {
    pub fn new(config: TableConfig) -> Self {
        assert!(config.capacity > 0, "table capacity must be positive");
        debug!("allocating frequency table with {} buckets", config.capacity);
        Self {
            buckets: vec![Bucket::vacant(); config.capacity],
            occupied: 0,
        }
    }

    /// Locates the slot owning `key`, claiming a vacant bucket for it if the
    /// key has never been seen. The count is left untouched, so a freshly
    /// claimed slot reports zero occurrences.
    pub fn find_or_insert(&mut self, key: &[u8]) -> FreqTabResult<SlotId> {
        if key.len() > MAX_KEY_LEN {
            return Err(FreqTabError::KeyTooLong {
                len: key.len(),
                max: MAX_KEY_LEN,
            });
        }
        assert!(!key.is_empty(), "empty keys are indistinguishable from vacant buckets");

        let capacity = self.buckets.len() as i64;
        let home = (hash(key) as usize) % self.buckets.len();

        for attempt in 0..PROBE_LIMIT {
            let slot = (home as i64 + probe_offset(attempt)).rem_euclid(capacity) as usize;
            let bucket = &mut self.buckets[slot];
            if !bucket.is_occupied() {
                bucket.claim(key);
                self.occupied += 1;
                return Ok(slot);
            }
            if bucket.matches(key) {
                return Ok(slot);
            }
        }

        Err(FreqTabError::InsertionExhausted {
            attempts: PROBE_LIMIT,
            home,
        })
    }

    /// Adds one occurrence to the bucket at `slot` and returns the new count.
    /// Slot ids handed out by `find_or_insert` stay valid for the table's
    /// whole life, so callers may increment them without re-checking.
    pub fn increment(&mut self, slot: SlotId) -> u32 {
        let bucket = &mut self.buckets[slot];
        debug_assert!(bucket.is_occupied(), "increment on a vacant bucket");
        bucket.count += 1;
        bucket.count
    }

    /// Counts one occurrence of `key`, inserting it first if needed.
    pub fn record(&mut self, key: &[u8]) -> FreqTabResult<SlotId> {
        let slot = self.find_or_insert(key)?;
        self.increment(slot);
        Ok(slot)
    }

    /// Borrows the bucket at `slot`. Panics if the slot is out of range;
    /// slot ids handed out by this table are always in range.
    pub fn bucket(&self, slot: SlotId) -> &Bucket {
        &self.buckets[slot]
    }

    /// Visits every occupied bucket in slot order. Vacant buckets are
    /// skipped, so the scan order is stable for a given key population.
    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(|bucket| bucket.is_occupied())
    }

    /// Number of distinct keys currently stored.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
}

/// Displacement from the home slot for the nth probe attempt: the square of
/// `attempt / 2`, positive on even attempts and negative on odd ones.
fn probe_offset(attempt: usize) -> i64 {
    let step = (attempt / 2) as i64;
    let square = step * step;
    if attempt % 2 == 0 {
        square
    } else {
        -square
    }
}
