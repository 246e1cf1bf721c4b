//! Tests for the dialog result envelope.

use transom::result::{DialogResult, DialogResultKind};

#[test]
fn test_kind_defaults_to_unset() {
    assert_eq!(DialogResultKind::default(), DialogResultKind::Unset);

    let result = DialogResult::unset();
    assert_eq!(result.kind(), DialogResultKind::Unset);
    assert!(!result.is_ok());
    assert!(!result.is_cancel());
    assert!(!result.is_exit());
    assert!(!result.has_data());
}

#[test]
fn test_payload_free_constructors() {
    assert!(DialogResult::ok().is_ok());
    assert!(DialogResult::cancel().is_cancel());
    assert!(DialogResult::exit().is_exit());
    assert!(!DialogResult::ok().has_data());
    assert!(!DialogResult::cancel().has_data());
    assert!(!DialogResult::exit().has_data());
}

#[test]
fn test_payload_carrying_constructors() {
    let ok = DialogResult::ok_with("saved".to_string());
    assert_eq!(ok.kind(), DialogResultKind::Ok);
    assert!(ok.has_data());

    let cancel = DialogResult::cancel_with(4_u8);
    assert_eq!(cancel.kind(), DialogResultKind::Cancel);
    assert_eq!(cancel.data::<u8>(), Some(&4));

    let exit = DialogResult::exit_with(true);
    assert_eq!(exit.kind(), DialogResultKind::Exit);
    assert_eq!(exit.data::<bool>(), Some(&true));
}

#[test]
fn test_data_borrow_is_type_checked() {
    let result = DialogResult::ok_with(42_i64);
    assert_eq!(result.data::<i64>(), Some(&42));
    assert_eq!(result.data::<String>(), None);

    let empty = DialogResult::ok();
    assert_eq!(empty.data::<i64>(), None);
}

#[test]
fn test_into_data_consumes_the_envelope() {
    struct Saved {
        id: i64,
    }

    let result = DialogResult::ok_with(Saved { id: 42 });
    let saved = result.into_data::<Saved>().expect("payload present");
    assert_eq!(saved.id, 42);

    // Type mismatch yields nothing; the payload goes down with the envelope.
    let result = DialogResult::ok_with(42_i64);
    assert!(result.into_data::<String>().is_none());

    let empty = DialogResult::cancel();
    assert!(empty.into_data::<i64>().is_none());
}

#[test]
fn test_debug_reports_kind_but_not_payload() {
    let debug = format!("{:?}", DialogResult::ok_with("secret".to_string()));
    assert!(debug.contains("Ok"));
    assert!(debug.contains("has_data: true"));
    assert!(!debug.contains("secret"));
}
