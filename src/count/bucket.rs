/// Maximum key length a bucket can store, in bytes.
pub const MAX_KEY_LEN: usize = 125;

/// One slot of a frequency table: an inline key, its length and the number of
/// times the key has been recorded. `len == 0` marks a vacant slot, so an
/// occupied bucket always holds a non-empty key.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub(crate) count: u32,
    pub(crate) len: u16,
    pub(crate) key: [u8; MAX_KEY_LEN],
}

impl Bucket {
    pub(crate) const fn vacant() -> Self {
        Bucket {
            count: 0,
            len: 0,
            key: [0; MAX_KEY_LEN],
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.len != 0
    }

    /// Stored key bytes; empty for a vacant slot.
    pub fn key(&self) -> &[u8] {
        &self.key[..self.len as usize]
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Claims this slot for `key`: copies the bytes, sets the length and
    /// leaves the count at zero. The caller has already verified vacancy and
    /// the `MAX_KEY_LEN` bound.
    pub(crate) fn claim(&mut self, key: &[u8]) {
        self.key[..key.len()].copy_from_slice(key);
        self.len = key.len() as u16;
        self.count = 0;
    }

    pub(crate) fn matches(&self, key: &[u8]) -> bool {
        self.len as usize == key.len() && &self.key[..key.len()] == key
    }
}
