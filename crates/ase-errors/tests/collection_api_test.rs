//! Integration tests for the public ErrorCollection API.

use std::{sync::Arc, thread};

use ase_errors::{CollectionError, ErrorCollection, ErrorRecord, HasSeverity, Severity};

fn record(severity: u8, number: i32) -> ErrorRecord {
    ErrorRecord::new(Severity::new(severity), format!("message {number}"))
        .with_message_number(number)
}

#[test]
fn test_scenarios() {
    let empty: ErrorCollection = ErrorCollection::new(vec![]);
    assert_eq!(empty.len(), 0);
    assert!(empty.main_error().is_none());

    let single = ErrorCollection::new(vec![record(5, 1)]);
    assert_eq!(single.len(), 1);
    assert_eq!(single.main_error(), Some(&record(5, 1)));

    let peak = ErrorCollection::new(vec![record(3, 1), record(9, 2), record(1, 3)]);
    assert_eq!(peak.main_error().map(ErrorRecord::message_number), Some(2));

    let tie = ErrorCollection::new(vec![record(7, 1), record(7, 2)]);
    assert_eq!(tie.main_error_index(), Some(1));

    let tied_maxima =
        ErrorCollection::new(vec![record(2, 1), record(9, 2), record(9, 3), record(4, 4)]);
    assert_eq!(tied_maxima.main_error_index(), Some(2));
    assert_eq!(
        tied_maxima.main_error().map(ErrorRecord::message_number),
        Some(3)
    );

    for errors in [&single, &peak, &tie, &tied_maxima] {
        assert!(matches!(
            errors.get(errors.len()),
            Err(CollectionError::IndexOutOfRange { .. })
        ));
    }
}

#[test]
fn test_main_error_does_not_reorder() {
    let input = vec![record(1, 1), record(20, 2), record(11, 3)];
    let errors = ErrorCollection::new(input.clone());

    let numbers: Vec<i32> = errors.iter().map(ErrorRecord::message_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(errors.as_slice(), input.as_slice());

    let mut count = 0;
    for (index, error) in (&errors).into_iter().enumerate() {
        assert_eq!(errors.get(index), Ok(error));
        count += 1;
    }
    assert_eq!(count, errors.len());
}

#[test]
fn test_main_error_is_fatal() {
    let errors = ErrorCollection::new(vec![record(16, 1), record(21, 2), record(10, 3)]);
    let main = errors.main_error().expect("collection is not empty");

    assert!(main.is_fatal());
    assert_eq!(main.severity(), Severity::new(21));
}

#[test]
fn test_concurrent_reads() {
    let errors = Arc::new(ErrorCollection::new(
        (0..64).map(|n| record((n % 17) as u8, n)).collect(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let errors = Arc::clone(&errors);
            thread::spawn(move || {
                let numbers: Vec<i32> = errors.iter().map(ErrorRecord::message_number).collect();
                (numbers, errors.main_error_index())
            })
        })
        .collect();

    for handle in handles {
        let (numbers, main) = handle.join().expect("reader thread panicked");
        assert_eq!(numbers, (0..64).collect::<Vec<_>>());
        // Severity 16 appears at 16, 33 and 50; the last one wins.
        assert_eq!(main, Some(50));
    }
}

#[test]
fn test_copy_into_buffer() {
    let errors = ErrorCollection::new(vec![record(12, 1), record(14, 2)]);

    let mut buffer = vec![record(0, 0); 4];
    errors.copy_into(&mut buffer, 2).expect("buffer is large enough");
    assert_eq!(buffer[2..], [record(12, 1), record(14, 2)]);
    assert_eq!(buffer[..2], [record(0, 0), record(0, 0)]);

    let mut short = vec![record(0, 0); 3];
    let result = errors.copy_into(&mut short, 2);
    assert!(matches!(
        result,
        Err(CollectionError::InsufficientCapacity {
            offset: 2,
            required: 2,
            capacity: 3
        })
    ));
    assert_eq!(short, vec![record(0, 0); 3]);
}

#[test]
fn test_deserialize_batch() {
    let errors: ErrorCollection = serde_json::from_str(
        r#"[
            {"message": "first", "severity": 11, "message_number": 1},
            {"message": "second", "severity": 11, "message_number": 2}
        ]"#,
    )
    .expect("valid batch");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.main_error().map(ErrorRecord::message), Some("second"));

    let absent: ErrorCollection = serde_json::from_str("null").expect("null is an empty batch");
    assert!(absent.is_empty());
    assert!(absent.main_error().is_none());
}

#[test]
fn test_serialize_round_trip_keeps_order_and_main() {
    let errors = ErrorCollection::new(vec![
        ErrorRecord::new(Severity::new(7), "a"),
        record(3, 2).with_proc_name("sp_load").with_line_number(12),
        ErrorRecord::new(Severity::new(7), "b"),
    ]);

    let json = serde_json::to_string(&errors).expect("collection serializes");
    assert!(json.starts_with('['), "serialized as a plain sequence: {json}");

    let restored: ErrorCollection = serde_json::from_str(&json).expect("round trip parses");

    assert_eq!(restored, errors);
    assert_eq!(restored.main_error_index(), Some(2));
    assert_eq!(restored.main_error().map(ErrorRecord::message), Some("b"));
    assert_eq!(restored[1].proc_name(), Some("sp_load"));
}

#[test]
fn test_error_messages() {
    let errors = ErrorCollection::new(vec![record(1, 1)]);

    let err = errors.get(3).unwrap_err();
    assert_eq!(
        err.to_string(),
        "index 3 is out of range for a collection of 1 errors"
    );

    let mut empty: Vec<ErrorRecord> = Vec::new();
    let err = errors.copy_into(&mut empty, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "destination of capacity 0 cannot hold 1 errors starting at offset 0"
    );
}
