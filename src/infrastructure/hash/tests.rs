use super::*;

#[test]
fn test_chaining_hash_small_codes() {
    // Leading zeros contribute nothing, so the last digits decide the value
    assert_eq!(chaining_hash("000000000"), 0);
    assert_eq!(chaining_hash("000000001"), 1);
    assert_eq!(chaining_hash("000000005"), 5);
    assert_eq!(chaining_hash("000000010"), 37);
    assert_eq!(chaining_hash("000000012"), 39);
}

#[test]
fn test_chaining_hash_wraps_like_32_bit_arithmetic() {
    assert_eq!(chaining_hash("999999999"), 1_154_838_177);
    assert_eq!(chaining_hash("123456789"), 1_623_187_757);
    assert_eq!(chaining_hash("987654321"), 1_807_449_421);
}

#[test]
fn test_knuth_hash() {
    assert_eq!(knuth_hash("000000001"), 1);
    // 2654435761 + 2 with the sign bit cleared
    assert_eq!(knuth_hash("000000012"), 506_952_115);
    assert_eq!(knuth_hash("999999999"), 939_095_825);
    assert_eq!(knuth_hash("123456789"), 869_944_493);
}

#[test]
fn test_horner31_hash() {
    assert_eq!(horner31_hash("000000001"), 1);
    assert_eq!(horner31_hash("000000012"), 33);
    assert_eq!(horner31_hash("999999999"), 1_229_536_137);
    assert_eq!(horner31_hash("987654321"), 1_916_949_253);
}

#[test]
fn test_digit_sum_hash() {
    assert_eq!(digit_sum_hash("000000000"), 0);
    assert_eq!(digit_sum_hash("123456789"), 45);
    assert_eq!(digit_sum_hash("999999999"), 81);
}

#[test]
fn test_horner7_hash_uses_seed_one() {
    // Seed 1 multiplied by 7 nine times
    assert_eq!(horner7_hash("000000000"), 40_353_607);
    assert_eq!(horner7_hash("000000001"), 40_353_608);
    assert_eq!(horner7_hash("999999999"), 100_884_016);
    assert_eq!(horner7_hash("123456789"), 48_200_140);
}

#[test]
fn test_double_hash_step_known_value() {
    // 7^9 mod 9 == 1
    assert_eq!(double_hash_step("000000000", 10), 2);
}

#[test]
fn test_double_hash_step_never_zero() {
    for capacity in [2usize, 3, 7, 10, 97, 1000, 10007] {
        for n in (0..1_000_000_000u64).step_by(7_919_993) {
            let code = format!("{:09}", n);
            let step = double_hash_step(&code, capacity);
            assert!(step >= 1, "step 0 for {} at capacity {}", code, capacity);
            assert!(step <= capacity - 1, "step {} out of range for capacity {}", step, capacity);
        }
    }
}

#[test]
fn test_double_hash_step_capacity_one() {
    assert_eq!(double_hash_step("123456789", 1), 1);
}

#[test]
fn test_hash_consistency() {
    let code = "314159265";
    assert_eq!(chaining_hash(code), chaining_hash(code));
    assert_eq!(knuth_hash(code), knuth_hash(code));
    assert_eq!(horner31_hash(code), horner31_hash(code));
    assert_eq!(horner7_hash(code), horner7_hash(code));
}

#[test]
fn test_hashes_stay_within_31_bits() {
    for code in ["999999999", "899999999", "123456789", "000000000"] {
        assert!(chaining_hash(code) <= SIGN_MASK);
        assert!(knuth_hash(code) <= SIGN_MASK as u64);
        assert!(horner31_hash(code) <= SIGN_MASK);
        assert!(horner7_hash(code) <= SIGN_MASK);
    }
}
