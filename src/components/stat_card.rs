//! Counter tile for the insights page.

use leptos::prelude::*;

/// A single labelled counter with an accent class for its background.
#[component]
pub fn StatCard(title: &'static str, value: i64, accent: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card {accent}")>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}
