use log::debug;

use crate::count::{FrequencyTable, MAX_KEY_LEN};
use crate::error::{FreqTabError, FreqTabResult};

/// Scans `input` for maximal runs of ASCII letters, folds each run to
/// lowercase, and records it in `table`. Every non-letter byte is a
/// delimiter, including digits, punctuation, and bytes above 0x7F.
///
/// Returns the number of tokens recorded. The scan stops at the first
/// failing token, leaving everything recorded before it intact.
pub fn count_tokens(input: &[u8], table: &mut FrequencyTable) -> FreqTabResult<usize> {
    let mut total = 0usize;
    let mut folded = [0u8; MAX_KEY_LEN];

    for run in input.split(|byte| !byte.is_ascii_alphabetic()) {
        if run.is_empty() {
            continue;
        }
        if run.len() > MAX_KEY_LEN {
            return Err(FreqTabError::KeyTooLong {
                len: run.len(),
                max: MAX_KEY_LEN,
            });
        }
        for (dst, src) in folded.iter_mut().zip(run) {
            *dst = src.to_ascii_lowercase();
        }
        table.record(&folded[..run.len()])?;
        total += 1;
    }

    debug!(
        "counted {} tokens across {} distinct keys",
        total,
        table.occupied()
    );
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;

    fn table() -> FrequencyTable {
        FrequencyTable::new(TableConfig { capacity: 1024 })
    }

    fn count_of(table: &mut FrequencyTable, key: &[u8]) -> u32 {
        let slot = table.find_or_insert(key).unwrap();
        table.bucket(slot).count()
    }

    #[test]
    fn every_non_letter_byte_delimits() {
        let mut table = table();
        let total = count_tokens(b"ab,cd-ef 12gh\n\tij3", &mut table).unwrap();
        assert_eq!(total, 5);
        assert_eq!(table.occupied(), 5);
        for key in [b"ab".as_slice(), b"cd", b"ef", b"gh", b"ij"] {
            assert_eq!(count_of(&mut table, key), 1);
        }
    }

    #[test]
    fn case_variants_share_one_bucket() {
        let mut table = table();
        let total = count_tokens(b"Dog dog DOG dOg", &mut table).unwrap();
        assert_eq!(total, 4);
        assert_eq!(table.occupied(), 1);
        assert_eq!(count_of(&mut table, b"dog"), 4);
    }

    #[test]
    fn bytes_above_ascii_split_runs() {
        let mut table = table();
        // "café" in UTF-8: the accented byte pair is not ASCII, so only the
        // leading letters form a token.
        count_tokens("café".as_bytes(), &mut table).unwrap();
        assert_eq!(table.occupied(), 1);
        assert_eq!(count_of(&mut table, b"caf"), 1);
    }

    #[test]
    fn trailing_run_is_flushed_at_end_of_input() {
        let mut table = table();
        let total = count_tokens(b"end of stream", &mut table).unwrap();
        assert_eq!(total, 3);
        assert_eq!(count_of(&mut table, b"stream"), 1);
    }

    #[test]
    fn empty_input_records_nothing() {
        let mut table = table();
        assert_eq!(count_tokens(b"", &mut table).unwrap(), 0);
        assert_eq!(count_tokens(b" \t\r\n42!", &mut table).unwrap(), 0);
        assert_eq!(table.occupied(), 0);
    }

    #[test]
    fn run_at_the_length_limit_is_accepted() {
        let mut table = table();
        let run = [b'Q'; MAX_KEY_LEN];
        count_tokens(&run, &mut table).unwrap();
        assert_eq!(count_of(&mut table, &[b'q'; MAX_KEY_LEN]), 1);
    }

    #[test]
    fn overlong_run_aborts_and_keeps_prior_counts() {
        let mut table = table();
        let mut input = b"ok ".to_vec();
        input.extend([b'a'; MAX_KEY_LEN + 75]);
        input.extend(b" after");

        let err = count_tokens(&input, &mut table).unwrap_err();
        assert!(matches!(
            err,
            FreqTabError::KeyTooLong { len, max } if len == MAX_KEY_LEN + 75 && max == MAX_KEY_LEN
        ));
        assert_eq!(table.occupied(), 1);
        assert_eq!(count_of(&mut table, b"ok"), 1);
    }
}
