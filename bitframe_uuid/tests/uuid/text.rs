//! The canonical text form: strict parsing, lowercase rendering.
use bitframe_uuid::Uuid;
use bitframe_uuid::errors::ParseUuidError;
use googletest::{assert_that, prelude::eq};

const BYTES: [u8; 16] = [
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10,
];
const TEXT: &str = "01020304-0506-0708-090a-0b0c0d0e0f10";

#[test]
fn renders_the_canonical_lowercase_form() {
    assert_that!(Uuid::from_bytes(BYTES).to_string(), eq(TEXT));
}

#[test]
fn parses_the_canonical_form() {
    let id: Uuid = TEXT.parse().unwrap();
    assert_that!(id, eq(Uuid::from_bytes(BYTES)));
}

#[test]
fn parsing_accepts_uppercase_digits_and_renders_lowercase() {
    let id: Uuid = "01020304-0506-0708-090A-0B0C0D0E0F10".parse().unwrap();
    assert_that!(id.to_string(), eq(TEXT));
}

#[test]
fn text_round_trips_for_random_identifiers() {
    for _ in 0..16 {
        let id = Uuid::random().unwrap();
        let reparsed: Uuid = id.to_string().parse().unwrap();
        assert_that!(reparsed, eq(id));
    }
}

#[test]
fn rejects_the_unhyphenated_form() {
    let err = "01020304050607080910111213141516"
        .parse::<Uuid>()
        .unwrap_err();
    insta::assert_snapshot!(err, @"The canonical UUID representation is 36 characters long, but the input is 32 characters long.");
}

#[test]
fn rejects_invalid_hex_digits() {
    let err = "zzzzzzzz-0506-0708-090a-0b0c0d0e0f10"
        .parse::<Uuid>()
        .unwrap_err();
    insta::assert_snapshot!(err, @"Expected a hexadecimal digit at position 0 of the UUID representation, found `z`.");
}

#[test]
fn rejects_wrong_lengths() {
    assert!("".parse::<Uuid>().is_err());
    assert!(TEXT[..35].parse::<Uuid>().is_err());
    assert!(format!("{TEXT}0").parse::<Uuid>().is_err());
}

#[test]
fn rejects_a_hyphen_in_a_digit_position() {
    let err = "-1020304-0506-0708-090a-0b0c0d0e0f10"
        .parse::<Uuid>()
        .unwrap_err();
    insta::assert_snapshot!(err, @"Expected a hexadecimal digit at position 0 of the UUID representation, found `-`.");
}

#[test]
fn rejects_a_non_hyphen_at_a_separator_position() {
    let err = "01020304+0506-0708-090a-0b0c0d0e0f10"
        .parse::<Uuid>()
        .unwrap_err();
    assert!(matches!(err, ParseUuidError::MissingHyphen(_)));
    insta::assert_snapshot!(err, @"Expected a hyphen at position 8 of the UUID representation, found `+`.");
}

#[test]
fn a_failed_set_leaves_the_identifier_untouched() {
    let mut id = Uuid::from_bytes(BYTES);
    assert!(id.set_text("01020304-0506-0708-090a-0b0c0d0e0fzz").is_err());
    assert_that!(id, eq(Uuid::from_bytes(BYTES)));

    id.set_text("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_that!(id.to_string(), eq("67e55044-10b1-426f-9247-bb680e5fe0c8"));
}
