//! SVG bar chart.
//!
//! DESIGN
//! ======
//! Geometry comes from `util::chart`; this component only emits SVG nodes so
//! charts render identically under SSR and after hydration.

use leptos::prelude::*;

use crate::util::chart::{CHART_HEIGHT, CHART_WIDTH, baseline, layout_bars};
use crate::util::format;

#[component]
pub fn BarChart(title: &'static str, series: Signal<Vec<(String, u64)>>) -> impl IntoView {
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let bars = move || {
        layout_bars(&series.get())
            .into_iter()
            .map(|bar| {
                let label_y = baseline() + 18.0;
                let value_y = (bar.y - 6.0).max(12.0);
                view! {
                    <g class="bar-chart__bar">
                        <rect x=bar.x y=bar.y width=bar.width height=bar.height fill=bar.color rx="3"></rect>
                        <text class="bar-chart__value" x=bar.center_x() y=value_y text-anchor="middle">
                            {format::count(bar.value)}
                        </text>
                        <text class="bar-chart__label" x=bar.center_x() y=label_y text-anchor="middle">
                            {bar.label.clone()}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <figure class="bar-chart">
            <figcaption class="bar-chart__title">{title}</figcaption>
            <Show
                when=move || !series.get().is_empty()
                fallback=|| view! { <p class="bar-chart__empty">"No data yet."</p> }
            >
                <svg class="bar-chart__svg" viewBox=view_box.clone() role="img" aria-label=title>
                    <line
                        class="bar-chart__axis"
                        x1="0"
                        x2=CHART_WIDTH
                        y1=baseline()
                        y2=baseline()
                    ></line>
                    {bars}
                </svg>
            </Show>
        </figure>
    }
}
