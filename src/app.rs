//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::channel::ChannelPage;
use crate::pages::home::HomePage;
use crate::pages::insights::InsightsPage;
use crate::pages::library::{HistoryPage, LikedVideosPage};
use crate::pages::login::LoginPage;
use crate::pages::playlists::{
    AddToPlaylistPage, CreatePlaylistPage, EditPlaylistPage, PlaylistPage,
};
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::search::SearchPage;
use crate::pages::settings::{AccountPage, PasswordPage, PhotosPage, SettingsPage};
use crate::pages::tweets::TweetsPage;
use crate::pages::upload::UploadPage;
use crate::pages::video_edit::{DeleteVideoPage, EditVideoPage};
use crate::pages::watch::WatchPage;
use crate::state::cache::VideoCache;
use crate::state::session;

/// Root application component.
///
/// Provides the session store and the shared video cache as contexts, then
/// sets up client-side routing with the navbar as the persistent shell.
/// The session restores synchronously from its persisted record, so the
/// first render already knows whether the user is authenticated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::restore());
    let videos = RwSignal::new(VideoCache::default());

    provide_context(session);
    provide_context(videos);

    view! {
        <Title text="VidStream"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=RegisterPage/>
                    <Route path=(StaticSegment("watch"), ParamSegment("id")) view=WatchPage/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                    <Route path=(StaticSegment("edit-video"), ParamSegment("id")) view=EditVideoPage/>
                    <Route path=(StaticSegment("delete-video"), ParamSegment("id")) view=DeleteVideoPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("channel"), ParamSegment("username")) view=ChannelPage/>
                    <Route path=StaticSegment("edit") view=SettingsPage/>
                    <Route path=(StaticSegment("edit"), StaticSegment("account")) view=AccountPage/>
                    <Route path=(StaticSegment("edit"), StaticSegment("photo")) view=PhotosPage/>
                    <Route path=(StaticSegment("edit"), StaticSegment("password")) view=PasswordPage/>
                    <Route path=StaticSegment("create-playlist") view=CreatePlaylistPage/>
                    <Route path=(StaticSegment("playlist"), ParamSegment("id")) view=PlaylistPage/>
                    <Route path=(StaticSegment("edit-playlist"), ParamSegment("id")) view=EditPlaylistPage/>
                    <Route path=(StaticSegment("add-to-playlist"), ParamSegment("id")) view=AddToPlaylistPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("like") view=LikedVideosPage/>
                    <Route path=StaticSegment("tweet") view=TweetsPage/>
                    <Route path=StaticSegment("dashboard") view=InsightsPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                </Routes>
            </main>
        </Router>
    }
}
