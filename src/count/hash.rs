/// 32-bit mixing hash over a byte sequence: the accumulator starts at the
/// input length, eats 4-byte groups as two little-endian 16-bit halves folded
/// through shift/XOR rounds, handles the 0-3 tail bytes with three distinct
/// mixing cases, then runs a six-step avalanche so every input bit reaches
/// the whole output. Unseeded and fully deterministic: equal inputs always
/// produce equal outputs.
pub fn hash(data: &[u8]) -> u32 {
    let mut hash = data.len() as u32;

    let (groups, tail) = data.split_at(data.len() & !3);
    for group in groups.chunks_exact(4) {
        hash = hash.wrapping_add(u32::from(u16::from_le_bytes([group[0], group[1]])));
        let temp = (u32::from(u16::from_le_bytes([group[2], group[3]])) << 11) ^ hash;
        hash = (hash << 16) ^ temp;
        hash = hash.wrapping_add(hash >> 11);
    }

    match tail {
        [a, b, c] => {
            hash = hash.wrapping_add(u32::from(u16::from_le_bytes([*a, *b])));
            hash ^= hash << 16;
            hash ^= u32::from(*c) << 18;
            hash = hash.wrapping_add(hash >> 11);
        }
        [a, b] => {
            hash = hash.wrapping_add(u32::from(u16::from_le_bytes([*a, *b])));
            hash ^= hash << 11;
            hash = hash.wrapping_add(hash >> 17);
        }
        [a] => {
            hash = hash.wrapping_add(u32::from(*a));
            hash ^= hash << 10;
            hash = hash.wrapping_add(hash >> 1);
        }
        _ => {}
    }

    hash ^= hash << 3;
    hash = hash.wrapping_add(hash >> 5);
    hash ^= hash << 4;
    hash = hash.wrapping_add(hash >> 17);
    hash ^= hash << 25;
    hash.wrapping_add(hash >> 6)
}
