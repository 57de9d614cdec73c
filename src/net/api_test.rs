use super::*;

#[test]
fn url_prefixes_versioned_base_path() {
    assert_eq!(url("/videos/public"), "/api/v1/videos/public");
    assert_eq!(url("/users/login"), "/api/v1/users/login");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}
