use std::cmp::Ordering;

use bitframe_uuid::Uuid;
use static_assertions::assert_impl_all;

mod text;

assert_impl_all!(Uuid: Copy, Send, Sync);

#[test]
fn the_default_identifier_is_the_null_sentinel() {
    assert!(Uuid::default().is_null());
    assert_eq!(Uuid::default(), Uuid::NULL);
}

#[test]
fn any_nonzero_byte_defeats_the_null_test() {
    let mut bytes = [0u8; 16];
    bytes[0] = 1;
    assert!(!Uuid::from_bytes(bytes).is_null());

    bytes = [0u8; 16];
    bytes[15] = 1;
    assert!(!Uuid::from_bytes(bytes).is_null());
}

#[test]
fn ordering_is_total_and_consistent_with_equality() {
    let zero = Uuid::NULL;

    let mut low = [0u8; 16];
    low[15] = 1;
    let low = Uuid::from_bytes(low);

    let mut high = [0u8; 16];
    high[0] = 1;
    let high = Uuid::from_bytes(high);

    assert_eq!(zero.cmp(&zero), Ordering::Equal);
    assert_eq!(zero.cmp(&low), Ordering::Less);
    assert_eq!(low.cmp(&zero), Ordering::Greater);
    // Bytes compare most significant first.
    assert!(high > low);
    let copy = low;
    assert_eq!(low, copy);
    assert_eq!(low.cmp(&copy), Ordering::Equal);
}

#[test]
fn raw_construction_accepts_any_pattern() {
    // Not a version-4 layout; accepted verbatim all the same.
    let bytes = [0xff; 16];
    let id = Uuid::from_bytes(bytes);
    assert_eq!(id.as_bytes(), &bytes);
    assert_eq!(id.version(), 0xf);

    let mut id = Uuid::NULL;
    id.set_bytes(bytes);
    assert_eq!(id.into_bytes(), bytes);
}
