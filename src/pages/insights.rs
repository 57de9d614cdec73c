//! Channel insights: aggregate counters, per-video numbers, like activity.
//!
//! Chart libraries are out of scope; the page renders stat tiles, simple
//! CSS-width bars, and a summary table from the three dashboard endpoints,
//! which are fetched in parallel and settle together before content renders.

#![allow(clippy::too_many_lines)]

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::types::{ChannelStats, TimelineEntry, Video};
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_on_auth_error;
use crate::util::format;

/// Integer percentage of `value` against `max`, clamped to 0..=100.
fn percent_of(value: i64, max: i64) -> i64 {
    if max <= 0 {
        return 0;
    }
    (value.max(0) * 100 / max).min(100)
}

#[component]
pub fn InsightsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let stats = RwSignal::new(None::<ChannelStats>);
    let videos = RwSignal::new(Vec::<Video>::new());
    let timeline = RwSignal::new(Vec::<TimelineEntry>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let (stats_res, videos_res, timeline_res) = futures::join!(
            crate::net::api::discovery::channel_stats(),
            crate::net::api::discovery::channel_videos(),
            crate::net::api::discovery::like_timeline(),
        );
        match stats_res {
            Ok(s) => stats.set(Some(s)),
            Err(err) => {
                log::warn!("failed to fetch channel stats: {err}");
                if expire_on_auth_error(session, &err) {
                    load_error.set("Please log in to view the dashboard.".to_owned());
                } else {
                    load_error.set("Failed to load dashboard data.".to_owned());
                }
            }
        }
        if let Ok(list) = videos_res {
            videos.set(list);
        }
        if let Ok(list) = timeline_res {
            timeline.set(list);
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        loading.set(false);
    }

    view! {
        <div class="insights-page">
            <h1>"Channel Insights"</h1>

            <Show when=move || loading.get()>
                <p class="page-status">"Loading dashboard..."</p>
            </Show>
            <Show when=move || !load_error.get().is_empty()>
                <p class="page-status page-status--error">{move || load_error.get()}</p>
            </Show>

            {move || {
                stats
                    .get()
                    .map(|s| {
                        view! {
                            <div class="insights-page__tiles">
                                <StatCard
                                    title="Total Videos"
                                    value=s.total_videos
                                    accent="stat-card--sky"
                                />
                                <StatCard
                                    title="Subscribers"
                                    value=s.total_subscribers
                                    accent="stat-card--emerald"
                                />
                                <StatCard
                                    title="Video Likes"
                                    value=s.total_video_likes
                                    accent="stat-card--rose"
                                />
                                <StatCard
                                    title="Post Likes"
                                    value=s.total_tweet_likes
                                    accent="stat-card--fuchsia"
                                />
                                <StatCard
                                    title="Total Views"
                                    value=s.total_views
                                    accent="stat-card--amber"
                                />
                            </div>
                        }
                    })
            }}

            <Show when=move || !videos.get().is_empty()>
                <section class="insights-page__section">
                    <h2>"Views per Video"</h2>
                    <div class="bar-list">
                        {move || {
                            let list = videos.get();
                            let max_views = list.iter().map(|v| v.view).max().unwrap_or(0);
                            list.into_iter()
                                .map(|video| {
                                    let width = percent_of(video.view, max_views);
                                    view! {
                                        <div class="bar-list__row">
                                            <span class="bar-list__label">{video.title.clone()}</span>
                                            <div class="bar-list__track">
                                                <div
                                                    class="bar-list__fill"
                                                    style=format!("width: {width}%")
                                                ></div>
                                            </div>
                                            <span class="bar-list__value">
                                                {format::views_label(video.view)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>

                <section class="insights-page__section">
                    <h2>"Likes by Hour"</h2>
                    <div class="bar-list">
                        {move || {
                            let buckets = format::aggregate_likes_by_hour(&timeline.get());
                            let max_count =
                                buckets.iter().map(|(_, count)| *count).max().unwrap_or(0);
                            buckets
                                .into_iter()
                                .map(|(hour, count)| {
                                    let width = percent_of(
                                        i64::try_from(count).unwrap_or(i64::MAX),
                                        i64::try_from(max_count).unwrap_or(i64::MAX),
                                    );
                                    view! {
                                        <div class="bar-list__row">
                                            <span class="bar-list__label">{hour}</span>
                                            <div class="bar-list__track">
                                                <div
                                                    class="bar-list__fill bar-list__fill--accent"
                                                    style=format!("width: {width}%")
                                                ></div>
                                            </div>
                                            <span class="bar-list__value">{count}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>

                <section class="insights-page__section">
                    <h2>"Video Summary"</h2>
                    <table class="insights-page__table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Published"</th>
                                <th>"Likes"</th>
                                <th>"Views"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                videos
                                    .get()
                                    .into_iter()
                                    .map(|video| {
                                        view! {
                                            <tr>
                                                <td>{video.title.clone()}</td>
                                                <td>
                                                    {format::format_short_date(
                                                        video.created_at.as_deref(),
                                                    )}
                                                </td>
                                                <td>{video.like_count}</td>
                                                <td>{video.view}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}
