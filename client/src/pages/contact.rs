//! Public contact form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::public_layout::PublicLayout;
use crate::net::api;
use crate::net::types::ContactRequest;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::validation::{self, FieldError, MAX_CONTACT_MESSAGE, MAX_NAME};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validate the form into a request payload.
///
/// # Errors
///
/// Returns the first failing field's message.
pub fn build_contact(form: &ContactForm) -> Result<ContactRequest, FieldError> {
    Ok(ContactRequest {
        name: validation::required_max("Name", &form.name, MAX_NAME)?,
        email: validation::email(&form.email)?,
        message: validation::required_max("Message", &form.message, MAX_CONTACT_MESSAGE)?,
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ContactForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_contact(&form.get()) {
            Ok(payload) => payload,
            Err(err) => {
                error.set(Some(err.0));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::send_contact(&payload).await {
                Ok(resp) => {
                    let message = if resp.message.is_empty() {
                        "Message sent. We'll be in touch soon.".to_owned()
                    } else {
                        resp.message
                    };
                    notify_success(toasts, message);
                    form.set(ContactForm::default());
                }
                Err(err) => notify_error(toasts, "Could not send message", &err),
            }
            busy.set(false);
        });
    };

    let remaining = move || MAX_CONTACT_MESSAGE.saturating_sub(form.get().message.chars().count());

    view! {
        <PublicLayout>
            <section class="contact">
                <h1>"Contact Us"</h1>
                <p>"Questions about ChapFarm or partnering with us? Send a message."</p>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Message"</span>
                        <textarea
                            rows="6"
                            prop:value=move || form.get().message
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                        <small class="form__hint">{move || format!("{} characters left", remaining())}</small>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </section>
        </PublicLayout>
    }
}
