use super::*;

#[test]
fn like_endpoints_format_expected_paths() {
    assert_eq!(video_like_endpoint("v1"), "/likes/toggle/v/v1");
    assert_eq!(tweet_like_endpoint("t1"), "/likes/toggle/t/t1");
}

#[test]
fn subscription_endpoints_format_expected_paths() {
    assert_eq!(channel_endpoint("u1"), "/subscriptions/c/u1");
    assert_eq!(status_endpoint("u1"), "/subscriptions/status/u1");
}

#[test]
fn like_outcome_checks_negative_form_first() {
    // "unliked" contains "liked", so ordering matters.
    assert_eq!(like_outcome("Video unliked successfully"), Some(false));
    assert_eq!(like_outcome("Video liked successfully"), Some(true));
}

#[test]
fn like_outcome_is_case_insensitive() {
    assert_eq!(like_outcome("Video Liked"), Some(true));
    assert_eq!(like_outcome("UNLIKED"), Some(false));
}

#[test]
fn like_outcome_unrecognized_message_is_none() {
    assert_eq!(like_outcome("ok"), None);
}

#[test]
fn subscription_outcome_checks_negative_form_first() {
    assert_eq!(subscription_outcome("Unsubscribed successfully"), Some(false));
    assert_eq!(subscription_outcome("Subscribed successfully"), Some(true));
    assert_eq!(subscription_outcome("done"), None);
}
