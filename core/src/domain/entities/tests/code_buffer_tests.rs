//! Unit tests for the code buffer entity

use crate::domain::entities::code_buffer::{CodeBuffer, CODE_LENGTH};
use crate::errors::ValidationError;

#[test]
fn test_new_buffer_is_empty() {
    let buffer = CodeBuffer::default();

    assert_eq!(buffer.len(), CODE_LENGTH);
    assert!(buffer.is_empty());
    assert!(!buffer.is_complete());
    assert_eq!(buffer.filled_count(), 0);
    assert_eq!(buffer.as_string(), "");
}

#[test]
fn test_write_and_complete() {
    let mut buffer = CodeBuffer::new(4);
    for (index, digit) in "2024".chars().enumerate() {
        buffer.write(index, digit).unwrap();
    }

    assert!(buffer.is_complete());
    assert_eq!(buffer.as_string(), "2024");
    assert_eq!(buffer.get(3), Some('4'));
    assert_eq!(buffer.get(4), None);
}

#[test]
fn test_write_overwrites_slot() {
    let mut buffer = CodeBuffer::new(2);
    buffer.write(0, '1').unwrap();
    buffer.write(0, '7').unwrap();

    assert_eq!(buffer.get(0), Some('7'));
    assert_eq!(buffer.filled_count(), 1);
}

#[test]
fn test_write_rejects_non_digit() {
    let mut buffer = CodeBuffer::new(6);

    assert_eq!(
        buffer.write(0, 'x'),
        Err(ValidationError::InvalidDigit { value: "x".to_string() })
    );
    assert!(buffer.is_empty());
}

#[test]
fn test_write_rejects_out_of_range() {
    let mut buffer = CodeBuffer::new(6);

    assert_eq!(
        buffer.write(6, '1'),
        Err(ValidationError::InvalidSlotIndex { index: 6, length: 6 })
    );
    assert_eq!(
        buffer.clear_slot(9),
        Err(ValidationError::InvalidSlotIndex { index: 9, length: 6 })
    );
}

#[test]
fn test_clearing_breaks_completeness() {
    let mut buffer = CodeBuffer::new(3);
    for index in 0..3 {
        buffer.write(index, '5').unwrap();
    }
    assert!(buffer.is_complete());

    buffer.clear_slot(1).unwrap();
    assert!(!buffer.is_complete());
    assert_eq!(buffer.slots(), &[Some('5'), None, Some('5')]);

    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_deserialize_accepts_digit_slots() {
    let buffer: CodeBuffer = serde_json::from_str(r#"{"slots":["4",null,"2"]}"#).unwrap();

    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.slots(), &[Some('4'), None, Some('2')]);
    assert!(!buffer.is_complete());
}

#[test]
fn test_deserialize_rejects_non_digit_slots() {
    let result = serde_json::from_str::<CodeBuffer>(r#"{"slots":["x","y"]}"#);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Expected a single digit"));
}
