use super::*;

#[test]
fn channel_endpoint_formats_expected_path() {
    assert_eq!(channel_endpoint("alice"), "/users/channel/alice");
}

#[test]
fn watch_endpoint_formats_expected_path() {
    assert_eq!(watch_endpoint("v42"), "/users/watch/v42");
}
