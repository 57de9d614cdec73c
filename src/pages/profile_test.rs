use super::*;

#[test]
fn default_tab_is_videos() {
    assert_eq!(ProfileTab::default(), ProfileTab::Videos);
}

#[test]
fn tab_variants_are_distinct() {
    assert_ne!(ProfileTab::Videos, ProfileTab::Following);
    assert_ne!(ProfileTab::Videos, ProfileTab::Playlists);
    assert_ne!(ProfileTab::Following, ProfileTab::Playlists);
}

#[test]
fn active_tab_gets_highlight_class() {
    assert_eq!(
        tab_class(ProfileTab::Videos, ProfileTab::Videos),
        "profile-page__tab profile-page__tab--active"
    );
    assert_eq!(
        tab_class(ProfileTab::Videos, ProfileTab::Playlists),
        "profile-page__tab"
    );
}
