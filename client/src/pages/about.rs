//! Public about page.

use leptos::prelude::*;

use crate::components::public_layout::PublicLayout;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PublicLayout>
            <section class="about">
                <h1>"Our Mission & Our Roots"</h1>
                <p>
                    "Founded in Kampala, Uganda, ChapFarm empowers farmers with climate-smart tools that improve resilience, productivity and market access."
                </p>
                <h2>"Reach All Farmers with 2G USSD"</h2>
                <p>
                    "Farmers on any handset receive crop and pest advice, weather alerts, a channel to report issues to authorities, and transport for their produce."
                </p>
                <h2>"A Web Platform for Partners"</h2>
                <ul class="about__list">
                    <li>"Agricultural authorities review farmer reports and issue advisories."</li>
                    <li>"Transport providers receive and manage farmer requests."</li>
                    <li>"Administrators manage accounts, alerts and platform analytics."</li>
                </ul>
            </section>
        </PublicLayout>
    }
}
