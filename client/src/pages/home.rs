//! Public landing page.

use leptos::prelude::*;

use crate::components::public_layout::PublicLayout;

const STEPS: [(&str, &str); 3] = [
    (
        "Farmers dial in",
        "Any phone can report pests, floods or drought and request transport over a simple USSD code.",
    ),
    (
        "Officers respond",
        "Agricultural authorities review reports as they arrive and send targeted advisories by SMS.",
    ),
    (
        "Produce moves",
        "Transport providers accept requests, track trips and get harvests to market.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PublicLayout>
            <section class="hero">
                <h1 class="hero__title">"Bridging Technology and Agriculture"</h1>
                <p class="hero__lead">
                    "ChapFarm gives Ugandan farmers climate-smart advice, timely alerts and market transport, and gives the people who support them one dashboard to act on it."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/register">
                        "Get started"
                    </a>
                    <a class="btn" href="/about">
                        "Learn more"
                    </a>
                </div>
            </section>
            <section class="steps">
                <h2>"How ChapFarm Works"</h2>
                <div class="steps__grid">
                    {STEPS
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <article class="feature-card">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="cta">
                <h2>"Ready to Join ChapFarm?"</h2>
                <a class="btn btn--primary" href="/contact">
                    "Talk to us"
                </a>
            </section>
        </PublicLayout>
    }
}
