use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use portfolio_chat::ContactRequest;

use crate::api;

/// Contact form — the chat flow's simpler sibling: one request, one
/// response, nothing persisted, no retry.
#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let company_value = company.get().trim().to_string();
        let form = ContactRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            company: (!company_value.is_empty()).then_some(company_value),
            subject: subject.get().trim().to_string(),
            message: message.get().trim().to_string(),
        };

        if form.name.is_empty()
            || form.email.is_empty()
            || form.subject.is_empty()
            || form.message.is_empty()
        {
            set_error.set(Some("Please fill in all required fields".to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match api::send_contact(&form).await {
                Ok(response) if response.success => set_submitted.set(true),
                Ok(response) => {
                    set_error.set(Some(
                        response
                            .error
                            .unwrap_or_else(|| "Failed to send your message".to_string()),
                    ));
                }
                Err(e) => {
                    log::error!("contact submission failed: {e}");
                    set_error.set(Some(
                        "Failed to send your message. Please try again later.".to_string(),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section id="contact" class="contact-section">
            <h2>"Get in touch"</h2>
            {move || {
                if submitted.get() {
                    view! {
                        <div class="contact-success">
                            <p>"Thanks for reaching out! I'll get back to you soon."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <form class="contact-form" on:submit=on_submit>
                            {move || {
                                error.get().map(|err| {
                                    view! {
                                        <div class="error-banner">{err}</div>
                                    }
                                })
                            }}
                            <div class="form-row">
                                <label>"Name"</label>
                                <input
                                    type="text"
                                    prop:value=name
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-row">
                                <label>"Email"</label>
                                <input
                                    type="email"
                                    prop:value=email
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-row">
                                <label>"Company (optional)"</label>
                                <input
                                    type="text"
                                    prop:value=company
                                    on:input=move |ev| company.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-row">
                                <label>"Subject"</label>
                                <input
                                    type="text"
                                    prop:value=subject
                                    on:input=move |ev| subject.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-row">
                                <label>"Message"</label>
                                <textarea
                                    rows="5"
                                    prop:value=message
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                />
                            </div>
                            <button class="submit-btn" type="submit" disabled=submitting>
                                {move || if submitting.get() { "Sending…" } else { "Send message" }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
