use super::*;

#[test]
fn like_increments_counter() {
    assert_eq!(adjusted_like_count(0, true), 1);
    assert_eq!(adjusted_like_count(7, true), 8);
}

#[test]
fn unlike_decrements_counter() {
    assert_eq!(adjusted_like_count(8, false), 7);
}

#[test]
fn unlike_never_goes_negative() {
    assert_eq!(adjusted_like_count(0, false), 0);
}
