/// Bucket slots a table allocates by default: 2^21 + 1. An odd, non-power-of-
/// two size keeps the alternating quadratic probe offsets from collapsing onto
/// a handful of residues.
pub const DEFAULT_TABLE_CAPACITY: usize = 2_097_153;

#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Total number of bucket slots, fixed for the table's lifetime. The table
    /// never grows; once the probe sequence finds no vacancy, insertion fails.
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            capacity: DEFAULT_TABLE_CAPACITY,
        }
    }
}
