use super::*;

#[test]
fn playlist_endpoints_format_expected_paths() {
    assert_eq!(playlist_endpoint("p1"), "/playlist/p1");
    assert_eq!(user_endpoint("u1"), "/playlist/user/u1");
}

#[test]
fn membership_endpoints_put_video_before_playlist() {
    assert_eq!(add_endpoint("v1", "p1"), "/playlist/add/v1/p1");
    assert_eq!(remove_endpoint("v1", "p1"), "/playlist/remove/v1/p1");
}
