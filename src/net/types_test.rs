use super::*;

#[test]
fn login_envelope_deserializes_user_and_tokens() {
    let raw = r#"{
        "statusCode": 200,
        "data": {
            "user": {
                "_id": "u1",
                "userName": "alice",
                "fullName": "Alice Example",
                "email": "alice@example.com",
                "avatar": "https://cdn.example.com/a.png"
            },
            "accessToken": "aaa",
            "refreshToken": "rrr"
        },
        "message": "User logged in successfully"
    }"#;
    let envelope: Envelope<AuthPayload> = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.data.user.id, "u1");
    assert_eq!(envelope.data.user.full_name, "Alice Example");
    assert_eq!(envelope.data.access_token, "aaa");
    assert_eq!(envelope.data.refresh_token, "rrr");
    assert_eq!(envelope.message, "User logged in successfully");
}

#[test]
fn envelope_message_defaults_to_empty() {
    let raw = r#"{ "data": [] }"#;
    let envelope: Envelope<Vec<Video>> = serde_json::from_str(raw).unwrap();
    assert!(envelope.data.is_empty());
    assert!(envelope.message.is_empty());
}

#[test]
fn video_tolerates_sparse_list_payload() {
    let raw = r#"{ "_id": "v1", "title": "Intro" }"#;
    let video: Video = serde_json::from_str(raw).unwrap();
    assert_eq!(video.id, "v1");
    assert_eq!(video.view, 0);
    assert_eq!(video.like_count, 0);
    assert!(!video.is_liked_by_current_user);
    assert!(video.owner.is_none());
    assert!(video.thumbnail.is_none());
}

#[test]
fn video_deserializes_populated_owner() {
    let raw = r#"{
        "_id": "v2",
        "title": "Deep dive",
        "view": 42,
        "owner": { "_id": "u9", "fullName": "Bob", "userName": "bob" }
    }"#;
    let video: Video = serde_json::from_str(raw).unwrap();
    let owner = video.owner.unwrap();
    assert_eq!(owner.id, "u9");
    assert_eq!(owner.full_name, "Bob");
    assert_eq!(video.view, 42);
}

#[test]
fn user_serializes_with_mongo_id_key() {
    let user = User {
        id: "u1".to_owned(),
        user_name: "alice".to_owned(),
        ..User::default()
    };
    let raw = serde_json::to_string(&user).unwrap();
    assert!(raw.contains("\"_id\":\"u1\""));
    assert!(raw.contains("\"userName\":\"alice\""));
}

#[test]
fn playlist_membership_check_matches_by_id() {
    let playlist = Playlist {
        id: "p1".to_owned(),
        name: "Chill".to_owned(),
        videos: vec![
            Video {
                id: "v1".to_owned(),
                title: "One".to_owned(),
                ..Video::default()
            },
            Video {
                id: "v2".to_owned(),
                title: "Two".to_owned(),
                ..Video::default()
            },
        ],
        ..Playlist::default()
    };
    assert!(playlist.contains_video("v2"));
    assert!(!playlist.contains_video("v3"));
}

#[test]
fn channel_profile_counts_default_to_zero() {
    let raw = r#"{ "_id": "u1", "userName": "alice" }"#;
    let profile: ChannelProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.subscribers_count, 0);
    assert_eq!(profile.channels_subscribed_to_count, 0);
}

#[test]
fn search_results_default_both_sections() {
    let raw = r#"{ "videos": [{ "_id": "v1", "title": "Hit" }] }"#;
    let results: SearchResults = serde_json::from_str(raw).unwrap();
    assert!(results.users.is_empty());
    assert_eq!(results.videos.len(), 1);
}

#[test]
fn tweet_like_outcome_deserializes() {
    let raw = r#"{ "tweetId": "t1", "liked": true, "totalLikes": 7 }"#;
    let outcome: TweetLikeOutcome = serde_json::from_str(raw).unwrap();
    assert_eq!(outcome.tweet_id, "t1");
    assert!(outcome.liked);
    assert_eq!(outcome.total_likes, 7);
}
