pub mod bucket;
pub mod hash;
pub mod table;
pub mod top;

pub use bucket::{Bucket, MAX_KEY_LEN};
pub use table::{FrequencyTable, SlotId, PROBE_LIMIT};
pub use top::top_k;
