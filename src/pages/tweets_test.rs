use super::*;

fn tweet(id: &str, content: &str) -> Tweet {
    Tweet {
        id: id.to_owned(),
        content: content.to_owned(),
        ..Tweet::default()
    }
}

#[test]
fn prepend_puts_newest_post_first() {
    let mut list = vec![tweet("t1", "older")];
    prepend_tweet(&mut list, tweet("t2", "newest"));
    assert_eq!(list[0].id, "t2");
}

#[test]
fn update_rewrites_only_the_target_post() {
    let mut list = vec![tweet("t1", "one"), tweet("t2", "two")];
    apply_tweet_update(&mut list, "t1", "edited");
    assert_eq!(list[0].content, "edited");
    assert_eq!(list[1].content, "two");
}

#[test]
fn remove_drops_only_the_target_post() {
    let mut list = vec![tweet("t1", "one"), tweet("t2", "two")];
    remove_tweet(&mut list, "t2");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "t1");
}

#[test]
fn like_outcome_updates_flag_and_counter() {
    let mut list = vec![tweet("t1", "one")];
    apply_like_outcome(
        &mut list,
        &TweetLikeOutcome {
            tweet_id: "t1".to_owned(),
            liked: true,
            total_likes: 5,
        },
    );
    assert!(list[0].liked_by_me);
    assert_eq!(list[0].likes_count, 5);
}

#[test]
fn like_outcome_for_unknown_post_is_a_no_op() {
    let mut list = vec![tweet("t1", "one")];
    apply_like_outcome(
        &mut list,
        &TweetLikeOutcome {
            tweet_id: "missing".to_owned(),
            liked: true,
            total_likes: 5,
        },
    );
    assert!(!list[0].liked_by_me);
    assert_eq!(list[0].likes_count, 0);
}
