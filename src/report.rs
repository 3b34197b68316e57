use std::io::Write;

use comfy_table::Cell;

use crate::count::Bucket;
use crate::error::FreqTabResult;

/// Writes one `token: count` line per ranked bucket, most frequent first.
pub fn write_ranked<W: Write>(out: &mut W, ranked: &[&Bucket]) -> FreqTabResult<()> {
    for bucket in ranked {
        writeln!(
            out,
            "{}: {}",
            String::from_utf8_lossy(bucket.key()),
            bucket.count()
        )?;
    }
    Ok(())
}

/// Renders the ranking as a bordered two-column table.
pub fn pretty_format_ranked(ranked: &[&Bucket]) -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    table.load_preset("||--+-++|    ++++++");

    if ranked.is_empty() {
        return table;
    }

    table.set_header(vec![Cell::new("token"), Cell::new("count")]);
    for bucket in ranked {
        table.add_row(vec![
            Cell::new(String::from_utf8_lossy(bucket.key())),
            Cell::new(bucket.count()),
        ]);
    }
    table
}
