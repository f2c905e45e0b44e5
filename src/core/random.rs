/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform f32 in [0, 1)
#[inline]
pub(crate) fn next_unit(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / 16_777_216.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_unit_stays_in_range() {
        let mut state = 12345u32;
        for _ in 0..1000 {
            let v = next_unit(&mut state);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
