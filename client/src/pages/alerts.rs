//! Alert broadcast form, shared by the admin and authority layouts.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::AlertRequest;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::validation::{self, FieldError, MAX_NAME};

pub const ALERT_TYPES: [&str; 4] = ["Weather Alert", "Market Alert", "Health Advisory", "Emergency Notice"];
pub const SEVERITIES: [&str; 3] = ["Low", "Medium", "High"];
pub const REGIONS: [&str; 5] = ["All", "Central", "Eastern", "Northern", "Western"];
pub const DELIVERY_IMMEDIATE: &str = "immediate";
pub const DELIVERY_SCHEDULED: &str = "scheduled";

/// Longest message that still fits one multi-part SMS batch.
pub const MAX_ALERT_MESSAGE: usize = 480;

#[derive(Clone, Debug, PartialEq)]
pub struct AlertForm {
    pub title: String,
    pub alert_type: String,
    pub severity: String,
    pub region: String,
    pub message: String,
    pub delivery_time: String,
}

impl Default for AlertForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            alert_type: ALERT_TYPES[0].to_owned(),
            severity: "Medium".to_owned(),
            region: REGIONS[0].to_owned(),
            message: String::new(),
            delivery_time: DELIVERY_IMMEDIATE.to_owned(),
        }
    }
}

fn one_of(label: &str, value: &str, allowed: &[&str]) -> Result<String, FieldError> {
    if allowed.contains(&value) {
        Ok(value.to_owned())
    } else {
        Err(FieldError(format!("Choose a valid {label}.")))
    }
}

/// Validate the form into a request payload.
///
/// # Errors
///
/// Fails on a blank title or message, or a choice outside the offered options.
pub fn build_alert(form: &AlertForm) -> Result<AlertRequest, FieldError> {
    Ok(AlertRequest {
        title: validation::required_max("Title", &form.title, MAX_NAME)?,
        alert_type: one_of("alert type", &form.alert_type, &ALERT_TYPES)?,
        severity: one_of("severity", &form.severity, &SEVERITIES)?,
        region: one_of("region", &form.region, &REGIONS)?,
        message: validation::required_max("Message", &form.message, MAX_ALERT_MESSAGE)?,
        delivery_time: one_of("delivery time", &form.delivery_time, &[DELIVERY_IMMEDIATE, DELIVERY_SCHEDULED])?,
    })
}

fn select_options(options: &'static [&'static str]) -> impl IntoView {
    options
        .iter()
        .map(|option| view! { <option value=*option>{*option}</option> })
        .collect_view()
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(AlertForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_alert(&form.get()) {
            Ok(payload) => payload,
            Err(err) => {
                error.set(Some(err.0));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::send_alert(&payload).await {
                Ok(_) => {
                    notify_success(toasts, format!("Alert sent to {} region", payload.region));
                    form.set(AlertForm::default());
                }
                Err(err) => notify_error(toasts, "Failed to send alert", &err),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="panel panel--narrow">
            <h2 class="panel__title">"Create Alert"</h2>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    <span>"Alert Title"</span>
                    <input
                        type="text"
                        placeholder="e.g. Heavy rainfall expected"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <div class="form__row">
                    <label class="form__field">
                        <span>"Alert Type"</span>
                        <select
                            prop:value=move || form.with(|f| f.alert_type.clone())
                            on:change=move |ev| form.update(|f| f.alert_type = event_target_value(&ev))
                        >
                            {select_options(&ALERT_TYPES)}
                        </select>
                    </label>
                    <label class="form__field">
                        <span>"Severity Level"</span>
                        <select
                            prop:value=move || form.with(|f| f.severity.clone())
                            on:change=move |ev| form.update(|f| f.severity = event_target_value(&ev))
                        >
                            {select_options(&SEVERITIES)}
                        </select>
                    </label>
                </div>
                <label class="form__field">
                    <span>"Target Region"</span>
                    <select
                        prop:value=move || form.with(|f| f.region.clone())
                        on:change=move |ev| form.update(|f| f.region = event_target_value(&ev))
                    >
                        {select_options(&REGIONS)}
                    </select>
                </label>
                <label class="form__field">
                    <span>"Message"</span>
                    <textarea
                        rows="5"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </label>
                <fieldset class="form__field">
                    <legend>"Delivery Time"</legend>
                    <label class="form__radio">
                        <input
                            type="radio"
                            name="delivery"
                            prop:checked=move || form.with(|f| f.delivery_time == DELIVERY_IMMEDIATE)
                            on:change=move |_| form.update(|f| f.delivery_time = DELIVERY_IMMEDIATE.to_owned())
                        />
                        "Send immediately"
                    </label>
                    <label class="form__radio">
                        <input
                            type="radio"
                            name="delivery"
                            prop:checked=move || form.with(|f| f.delivery_time == DELIVERY_SCHEDULED)
                            on:change=move |_| form.update(|f| f.delivery_time = DELIVERY_SCHEDULED.to_owned())
                        />
                        "Schedule for later"
                    </label>
                </fieldset>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send Alert" }}
                </button>
            </form>
        </div>
    }
}
