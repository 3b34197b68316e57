use crate::count::bucket::Bucket;

/// Picks the `k` buckets with the highest occurrence counts in a single pass
/// over `buckets`, returned in non-increasing count order.
///
/// A candidate displaces a ranked bucket only when its count is strictly
/// greater; on equal counts the bucket scanned earlier keeps the better
/// rank. With fewer than `k` candidates the result simply holds all of them
/// sorted.
pub fn top_k<'a, I>(buckets: I, k: usize) -> Vec<&'a Bucket>
where
    I: IntoIterator<Item = &'a Bucket>,
{
    // Grows to at most k entries; k is caller-supplied, so no preallocation.
    let mut ranked: Vec<&Bucket> = Vec::new();
    if k == 0 {
        return ranked;
    }

    for candidate in buckets {
        match ranked.iter().position(|held| candidate.count() > held.count()) {
            Some(outranked) => {
                ranked.insert(outranked, candidate);
                ranked.truncate(k);
            }
            None if ranked.len() < k => ranked.push(candidate),
            None => {}
        }
    }

    ranked
}
