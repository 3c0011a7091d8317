// Hash functions for 9-digit numeric codes
//
// Every table variant owns exactly one of these; they are never shared.
// Each byte of the code is read as a decimal digit value, and all arithmetic
// wraps so that only the low 31 bits survive the mask.

/// Mask that clears the sign bit of a 32-bit accumulator
pub const SIGN_MASK: u32 = 0x7FFF_FFFF;

/// Knuth's multiplicative constant, floor(2^32 * (sqrt(5) - 1) / 2)
pub const KNUTH_MULTIPLIER: u64 = 2_654_435_761;

#[inline]
fn digit(byte: u8) -> u32 {
    byte.wrapping_sub(b'0') as u32
}

/// Horner evaluation with a small prime, masked to 31 bits after every step
#[inline]
fn masked_horner(code: &str, seed: u32, prime: u32) -> u32 {
    let mut hash = seed;
    for byte in code.bytes() {
        hash = hash.wrapping_mul(prime).wrapping_add(digit(byte)) & SIGN_MASK;
    }
    hash
}

/// Hash used by separate chaining: prime multiplier 37
pub fn chaining_hash(code: &str) -> u32 {
    masked_horner(code, 0, 37)
}

/// Hash used by linear probing: 64-bit accumulator with Knuth's golden-ratio
/// multiplier, masked to 31 bits at the end
pub fn knuth_hash(code: &str) -> u64 {
    let mut hash: u64 = 0;
    for byte in code.bytes() {
        hash = hash
            .wrapping_mul(KNUTH_MULTIPLIER)
            .wrapping_add(digit(byte) as u64);
    }
    hash & SIGN_MASK as u64
}

/// Hash used by quadratic probing: polynomial with prime 31
pub fn horner31_hash(code: &str) -> u32 {
    masked_horner(code, 0, 31)
}

/// Primary hash used by double hashing: running digit sum
pub fn digit_sum_hash(code: &str) -> u32 {
    code.bytes()
        .fold(0u32, |hash, byte| hash.wrapping_add(digit(byte)) & SIGN_MASK)
}

/// Secondary hash used by double hashing: polynomial with prime 7 and seed 1
pub fn horner7_hash(code: &str) -> u32 {
    masked_horner(code, 1, 7)
}

/// Step size for double hashing, always in `[1, capacity - 1]`
///
/// A step of 0 would never leave the primary slot. With a capacity of 1
/// there is no such range and the step is 1.
pub fn double_hash_step(code: &str, capacity: usize) -> usize {
    if capacity <= 1 {
        return 1;
    }
    1 + (horner7_hash(code) as usize % (capacity - 1))
}
