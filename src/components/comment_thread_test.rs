use super::*;

fn comment(id: &str, content: &str) -> Comment {
    Comment {
        id: id.to_owned(),
        content: content.to_owned(),
        ..Comment::default()
    }
}

#[test]
fn prepend_puts_newest_comment_first() {
    let mut list = vec![comment("c1", "older")];
    prepend_comment(&mut list, comment("c2", "newest"));
    assert_eq!(list[0].id, "c2");
    assert_eq!(list.len(), 2);
}

#[test]
fn update_rewrites_only_the_target_comment() {
    let mut list = vec![comment("c1", "one"), comment("c2", "two")];
    apply_comment_update(&mut list, "c2", "edited");
    assert_eq!(list[0].content, "one");
    assert_eq!(list[1].content, "edited");
}

#[test]
fn update_with_unknown_id_is_a_no_op() {
    let mut list = vec![comment("c1", "one")];
    apply_comment_update(&mut list, "missing", "edited");
    assert_eq!(list[0].content, "one");
}

#[test]
fn remove_drops_only_the_target_comment() {
    let mut list = vec![comment("c1", "one"), comment("c2", "two")];
    remove_comment(&mut list, "c1");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "c2");
}
