use super::*;

#[test]
fn tweet_endpoint_formats_expected_path() {
    assert_eq!(tweet_endpoint("t3"), "/tweets/t3");
}
