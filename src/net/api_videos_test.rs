use super::*;

#[test]
fn video_endpoint_formats_expected_path() {
    assert_eq!(video_endpoint("v7"), "/videos/v7");
}

#[test]
fn owner_query_sorts_newest_first() {
    assert_eq!(
        owner_query("u1"),
        "/videos?userId=u1&sortBy=createdAt&sortType=desc"
    );
}
