//! Bulk SMS composer for admins.

#[cfg(test)]
#[path = "messaging_test.rs"]
mod messaging_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::BulkSmsRequest;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::validation::{self, FieldError, parse_phone_list};

/// Characters in a single SMS segment.
pub const SMS_SEGMENT: usize = 160;

/// Validate recipients and message into a bulk send.
///
/// # Errors
///
/// Fails when no recipient is listed, any recipient is not a phone number,
/// or the message is blank.
pub fn build_bulk_sms(recipients: &str, message: &str) -> Result<BulkSmsRequest, FieldError> {
    let numbers = parse_phone_list(recipients);
    if numbers.is_empty() {
        return Err(FieldError("Add at least one recipient.".to_owned()));
    }
    let phone_numbers = numbers
        .iter()
        .map(|n| validation::phone(n).map_err(|_| FieldError(format!("Invalid phone number: {n}"))))
        .collect::<Result<Vec<_>, _>>()?;
    let message = validation::required("Message", message)?;
    Ok(BulkSmsRequest { phone_numbers, message })
}

/// Number of SMS segments `message` occupies.
pub fn segment_count(message: &str) -> usize {
    message.chars().count().div_ceil(SMS_SEGMENT)
}

#[component]
pub fn MessagingPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let recipients = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_bulk_sms(&recipients.get(), &message.get()) {
            Ok(payload) => payload,
            Err(err) => {
                error.set(Some(err.0));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let sent_to = payload.phone_numbers.len();
        leptos::task::spawn_local(async move {
            match api::send_bulk_sms(&payload).await {
                Ok(_) => {
                    notify_success(toasts, format!("Message sent to {sent_to} recipient(s)"));
                    recipients.set(String::new());
                    message.set(String::new());
                }
                Err(err) => notify_error(toasts, "Failed to send SMS", &err),
            }
            busy.set(false);
        });
    };

    let recipient_count = move || recipients.with(|r| parse_phone_list(r).len());
    let message_meta = move || {
        message.with(|m| format!("{} characters, {} SMS", m.chars().count(), segment_count(m)))
    };

    view! {
        <div class="panel panel--narrow">
            <h2 class="panel__title">"Send SMS"</h2>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    <span>"Recipients"</span>
                    <textarea
                        rows="4"
                        placeholder="+256700000001, +256700000002"
                        prop:value=move || recipients.get()
                        on:input=move |ev| recipients.set(event_target_value(&ev))
                    ></textarea>
                    <small class="form__hint">
                        {move || format!("{} recipient(s); separate numbers with commas or new lines", recipient_count())}
                    </small>
                </label>
                <label class="form__field">
                    <span>"Message"</span>
                    <textarea
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <small class="form__hint">{message_meta}</small>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
