use super::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(record: &Record) -> u64 {
    let mut hasher = DefaultHasher::new();
    record.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_record_valid_code() {
    let record = Record::new("123456789").unwrap();
    assert_eq!(record.code(), "123456789");
    assert_eq!(record.to_string(), "123456789");
    assert_eq!(record.digits().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_record_invalid_length() {
    assert_eq!(
        Record::new("12345678"),
        Err(RecordError::InvalidLength { expected: 9, actual: 8 })
    );
    assert_eq!(
        Record::new("1234567890"),
        Err(RecordError::InvalidLength { expected: 9, actual: 10 })
    );
    assert!(Record::new("").is_err());
}

#[test]
fn test_record_invalid_digit() {
    let err = Record::new("12345a789").unwrap_err();
    assert_eq!(
        err,
        RecordError::InvalidDigit {
            code: "12345a789".to_string(),
            position: 5
        }
    );
    assert!(err.to_string().contains("position 5"));
}

#[test]
fn test_record_non_ascii_input() {
    // Three characters, six bytes
    assert_eq!(
        Record::new("éàü"),
        Err(RecordError::InvalidLength { expected: 9, actual: 3 })
    );

    // Nine characters, ten bytes: the length passes and the digit check fails
    assert_eq!(
        Record::new("12345678é"),
        Err(RecordError::InvalidDigit {
            code: "12345678é".to_string(),
            position: 8
        })
    );
}

#[test]
fn test_record_equality_by_code() {
    // Two records built from the same code are interchangeable keys
    let a = Record::new(String::from("000000042")).unwrap();
    let b: Record = "000000042".parse().unwrap();
    let c = Record::new("000000043").unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
}

#[test]
fn test_record_from_index() {
    assert_eq!(Record::from_index(1).unwrap().code(), "000000001");
    assert_eq!(Record::from_index(999_999_999).unwrap().code(), "999999999");
    assert_eq!(
        Record::from_index(1_000_000_000),
        Err(RecordError::OutOfRange(1_000_000_000))
    );
}

#[test]
fn test_record_error_display() {
    let err = RecordError::InvalidLength { expected: 9, actual: 3 };
    assert_eq!(
        err.to_string(),
        "Invalid code length: expected 9 digits, got 3"
    );
}
