use super::*;

#[test]
fn blank_fields_are_rejected() {
    assert_eq!(validate_credentials("", "secret"), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials("   ", "secret"), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials("a@b.c", ""), Err(MISSING_FIELDS));
}

#[test]
fn filled_fields_pass() {
    assert_eq!(validate_credentials("a@b.c", "secret"), Ok(()));
}

#[test]
fn missing_fields_copy() {
    assert_eq!(MISSING_FIELDS, "Please fill in all fields");
}
