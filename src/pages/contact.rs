//! Contact form page with real-time validation and a local submission
//! snapshot.

use leptos::prelude::*;

use crate::state::contact::{
    ContactForm, Field, validate_email, validate_message, validate_name,
};
use crate::util::storage;

/// Fixed logical key for the last successful submission snapshot.
const SNAPSHOT_KEY: &str = "lastContactForm";

/// How long the success message stays up before the form returns, in ms.
#[cfg(feature = "csr")]
const SUCCESS_RESET_MS: u32 = 5000;

/// Contact page — fields validate as you type, submission is blocked until
/// every rule passes, and a valid submit persists one JSON snapshot and
/// shows a success message for a few seconds.
#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let newsletter = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let subject_error = RwSignal::new(None::<&'static str>);
    let message_error = RwSignal::new(None::<&'static str>);

    // Live validation: empty fields show no error until submit.
    let check_live = move |value: &str, ok: fn(&str) -> bool, field: Field,
                           error: RwSignal<Option<&'static str>>| {
        if value.is_empty() || ok(value) {
            error.set(None);
        } else {
            error.set(Some(field.error_message()));
        }
    };

    let clear_form = move || {
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
        newsletter.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = ContactForm {
            name: name.get(),
            email: email.get(),
            subject: subject.get(),
            message: message.get(),
            newsletter: newsletter.get(),
        };

        let failed = form.validate();
        let message_for = |field: Field| {
            failed
                .contains(&field)
                .then(|| field.error_message())
        };
        name_error.set(message_for(Field::Name));
        email_error.set(message_for(Field::Email));
        subject_error.set(message_for(Field::Subject));
        message_error.set(message_for(Field::Message));

        if !failed.is_empty() {
            return;
        }

        storage::save(SNAPSHOT_KEY, &form.submission(now_iso()));
        submitted.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SUCCESS_RESET_MS).await;
            clear_form();
            submitted.set(false);
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = clear_form;
        }
    };

    view! {
        <div class="contact-page">
            <h1>"Contact Us"</h1>

            <Show when=move || submitted.get()>
                <div class="contact-page__success">
                    <h2>"Message sent!"</h2>
                    <p>"Thanks for writing in. We read everything, even the rupee complaints."</p>
                </div>
            </Show>

            <Show when=move || !submitted.get()>
                <form class="contact-form" on:submit=on_submit>
                    <FormGroup label="Name" error=name_error>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                check_live(&value, validate_name, Field::Name, name_error);
                                name.set(value);
                            }
                        />
                    </FormGroup>

                    <FormGroup label="Email" error=email_error>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                check_live(&value, validate_email, Field::Email, email_error);
                                email.set(value);
                            }
                        />
                    </FormGroup>

                    <FormGroup label="Subject" error=subject_error>
                        <select
                            prop:value=move || subject.get()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                if !value.is_empty() {
                                    subject_error.set(None);
                                }
                                subject.set(value);
                            }
                        >
                            <option value="">"Choose a subject..."</option>
                            <option value="general">"General question"</option>
                            <option value="feedback">"Site feedback"</option>
                            <option value="correction">"Guide correction"</option>
                        </select>
                    </FormGroup>

                    <FormGroup label="Message" error=message_error>
                        <textarea
                            rows="6"
                            prop:value=move || message.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                check_live(&value, validate_message, Field::Message, message_error);
                                message.set(value);
                            }
                        ></textarea>
                    </FormGroup>

                    <label class="contact-form__newsletter">
                        <input
                            type="checkbox"
                            prop:checked=move || newsletter.get()
                            on:change=move |ev| newsletter.set(event_target_checked(&ev))
                        />
                        "Sign me up for the newsletter"
                    </label>

                    <button class="btn btn--primary" type="submit">
                        "Send Message"
                    </button>
                </form>
            </Show>
        </div>
    }
}

/// A labelled form row with an inline error slot.
#[component]
fn FormGroup(
    label: &'static str,
    error: RwSignal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-group" class=("form-group--error", move || error.get().is_some())>
            <label>
                {label}
                {children()}
            </label>
            <span class="form-group__error">{move || error.get().unwrap_or("")}</span>
        </div>
    }
}

/// Current time as an ISO-8601 string (empty outside the browser).
fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
