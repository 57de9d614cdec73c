use super::*;

#[test]
fn list_endpoint_requests_first_page() {
    assert_eq!(list_endpoint("v1"), "/comments/v1?page=1&limit=20");
}

#[test]
fn video_endpoint_formats_expected_path() {
    assert_eq!(video_endpoint("v1"), "/comments/v1");
}

#[test]
fn comment_endpoint_addresses_single_comment() {
    assert_eq!(comment_endpoint("c9"), "/comments/c/c9");
}
