//! "Let's connect" newsletter signup section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `#newsletter-form` from a single `RwSignal<NewsletterForm>`; the
//! submit handler validates locally and, in the browser, sends the JSONP
//! request and feeds the outcome back into the same signal.

#[cfg(test)]
#[path = "newsletter_section_test.rs"]
mod newsletter_section_test;

use leptos::prelude::*;

use crate::state::newsletter::{NewsletterForm, SUCCESS_MESSAGE};

const INPUT_CLASS: &str = "w-full px-4 sm:px-6 py-3 sm:py-4 bg-transparent border rounded-md text-sm sm:text-base text-text-primary placeholder:text-text-tertiary focus:outline-none focus:border-primary transition-colors";

#[component]
pub fn NewsletterSection() -> impl IntoView {
    let form = RwSignal::new(NewsletterForm::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut address = None;
        form.update(|f| address = f.begin_submit());
        match address {
            Some(address) => submit(form, address),
            None => focus(input_ref),
        }
    };

    view! {
        <section id="contact" class="py-16 sm:py-20 md:py-32 lg:py-40 bg-background-alternate">
            <div class="max-w-container mx-auto px-4 sm:px-6 md:px-12 lg:px-16">
                <div class="max-w-2xl mx-auto text-center">
                    <span class="text-text-secondary text-xs md:text-sm tracking-[0.2em] uppercase mb-4 block">
                        "Join the community"
                    </span>
                    <h2 class="font-display text-[48px] sm:text-[72px] md:text-[96px] lg:text-[128px] leading-[0.9] text-text-primary mb-8 sm:mb-10 md:mb-12">
                        "LET'S CONNECT"
                    </h2>
                    <form id="newsletter-form" class="w-full" novalidate=true on:submit=on_submit>
                        <div class="relative">
                            <div class="flex flex-col sm:flex-row gap-3 sm:gap-4 items-stretch">
                                <div class="flex-1">
                                    <label for="email-input" class="sr-only">"Email address"</label>
                                    <input
                                        type="email"
                                        id="email-input"
                                        name="EMAIL"
                                        placeholder="Email"
                                        required=true
                                        aria-describedby="email-error"
                                        node_ref=input_ref
                                        class=move || input_class(form.with(|f| f.error_message().is_some()))
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| form.update(|f| f.edit(event_target_value(&ev)))
                                    />
                                </div>
                                <button
                                    type="submit"
                                    class="px-8 sm:px-10 py-3 sm:py-4 bg-primary text-white text-sm sm:text-base font-medium rounded-md hover:bg-primary-hover transition-colors whitespace-nowrap"
                                    disabled=move || form.with(NewsletterForm::is_submitting)
                                >
                                    "Subscribe"
                                </button>
                            </div>
                            <Show when=move || form.with(|f| f.error_message().is_some())>
                                <p
                                    id="email-error"
                                    class="mt-2 sm:absolute sm:mt-0 sm:left-0 sm:top-full text-xs text-red-600 text-left"
                                    role="alert"
                                >
                                    {move || form.with(|f| f.error_message().unwrap_or_default().to_owned())}
                                </p>
                            </Show>
                        </div>
                        <Show when=move || form.with(NewsletterForm::is_success)>
                            <p id="form-success" class="mt-4 text-sm text-green-600" role="status" aria-live="polite">
                                {SUCCESS_MESSAGE}
                            </p>
                        </Show>
                    </form>
                    <p class="mt-4 sm:mt-6 text-text-tertiary text-xs">
                        "Subscribe to receive updates. Unsubscribe anytime."
                    </p>
                </div>
            </div>
        </section>
    }
}

fn input_class(has_error: bool) -> String {
    let border = if has_error { "border-red-500" } else { "border-border-input" };
    format!("{INPUT_CLASS} {border}")
}

/// Send the request and record its outcome; success hides itself later.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn submit(form: RwSignal<NewsletterForm>, address: String) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::newsletter::{SUCCESS_VISIBLE_MS, SubscribeRequest, jsonp, utm_source};

        let source = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| utm_source(&search));
        let request = SubscribeRequest::new(address, source, now_ms());
        let outcome = jsonp::subscribe(&request).await;
        match &outcome {
            Ok(()) => log::info!("newsletter: subscribed"),
            Err(err) => log::info!("newsletter: signup not accepted: {err}"),
        }
        let subscribed = outcome.is_ok();
        form.update(|f| f.finish(outcome));
        if subscribed {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SUCCESS_VISIBLE_MS))).await;
            form.update(NewsletterForm::expire_success);
        }
    });
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn focus(input_ref: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = input_ref.get_untracked() {
            if let Err(err) = input.focus() {
                log::debug!("newsletter: focus failed: {err:?}");
            }
        }
    }
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
