use super::*;

#[test]
fn percent_of_scales_against_max() {
    assert_eq!(percent_of(50, 100), 50);
    assert_eq!(percent_of(100, 100), 100);
    assert_eq!(percent_of(1, 3), 33);
}

#[test]
fn percent_of_zero_max_is_zero() {
    assert_eq!(percent_of(10, 0), 0);
    assert_eq!(percent_of(10, -1), 0);
}

#[test]
fn percent_of_clamps_negative_values() {
    assert_eq!(percent_of(-5, 100), 0);
}

#[test]
fn percent_of_never_exceeds_one_hundred() {
    assert_eq!(percent_of(200, 100), 100);
}
