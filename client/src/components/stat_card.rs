//! Counter card used across the role dashboards.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let class = match accent {
        Some(accent) => format!("stat-card stat-card--{accent}"),
        None => "stat-card".to_owned(),
    };
    view! {
        <div class=class>
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            {hint.map(|hint| view! { <span class="stat-card__hint">{hint}</span> })}
        </div>
    }
}
