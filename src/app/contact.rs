use leptos::{ev, ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_use::{use_event_listener, use_window};

use super::{current_fragment, replace_fragment, Dispatch, ServiceRequested};
use crate::contact::{ContactForm, ContactStatus, ContactWorkflow, Field, SubmitOutcome};
use crate::newsletter::{Signup, SignupStatus};
use crate::page::PageMsg;
use crate::sections::Section;

#[server]
pub async fn send_contact(form: ContactForm) -> Result<SubmitOutcome, ServerFnError> {
    use crate::config::SERVICE_CONFIG;
    use crate::contact::deliver;
    use crate::services::{emailjs::EmailJsClient, supabase::SupabaseClient};

    let mailer = EmailJsClient::new(&SERVICE_CONFIG);
    let store = SupabaseClient::new(&SERVICE_CONFIG);
    let outcome = deliver(&form, &mailer, &store).await;
    tracing::info!(?outcome, "contact form submitted");
    Ok(outcome)
}

#[server]
pub async fn subscribe_email(email: String) -> Result<(), ServerFnError> {
    use crate::config::SERVICE_CONFIG;
    use crate::newsletter::subscribe;
    use crate::services::supabase::SupabaseClient;

    let store = SupabaseClient::new(&SERVICE_CONFIG);
    subscribe(&email, &store)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn Contact() -> impl IntoView {
    let workflow = RwSignal::new(ContactWorkflow::default());
    let dispatch = expect_context::<Dispatch>();
    let ServiceRequested(service_requested) = expect_context::<ServiceRequested>();

    let sync_fragment = move || {
        let hash = current_fragment();
        workflow.update(|w| {
            w.sync_fragment(&hash);
        });
    };
    // runs once on mount too, picking up a request made before the form existed
    Effect::watch(
        move || service_requested.track(),
        move |_, _, _| sync_fragment(),
        true,
    );
    let _ = use_event_listener(use_window(), ev::hashchange, move |_| sync_fragment());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = if let Some(form) = workflow.try_update(|w| w.begin_submit()).flatten() {
            form
        } else {
            return;
        };
        spawn_local(async move {
            let outcome = send_contact(form)
                .await
                .unwrap_or_else(|e| SubmitOutcome::Failed(e.to_string()));
            let hash = current_fragment();
            if let Some(next) = workflow.try_update(|w| w.finish(outcome, &hash)).flatten() {
                replace_fragment(&next);
            }
        });
    };
    let on_clear = move |_: ev::MouseEvent| {
        let hash = current_fragment();
        if let Some(next) = workflow.try_update(|w| w.clear(&hash)).flatten() {
            replace_fragment(&next);
        }
    };

    let field_value = move |field: Field| {
        workflow.with(|w| {
            let form = w.form();
            match field {
                Field::Name => form.name.clone(),
                Field::Email => form.email.clone(),
                Field::Subject => form.subject.clone(),
                Field::Message => form.message.clone(),
            }
        })
    };
    let on_input = move |field: Field| {
        move |e: ev::Event| workflow.update(|w| w.edit(field, event_target_value(&e)))
    };
    let submitting = move || workflow.with(|w| *w.status() == ContactStatus::Submitting);
    let succeeded = move || workflow.with(|w| *w.status() == ContactStatus::Success);

    view! {
        <section id=Section::Contact.id() class="min-h-screen py-24 flex items-center">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get in Touch"</h2>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "Have a project in mind or a question about my services? Send me a message."
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 bg-gray-900/50 backdrop-blur-sm p-8 rounded-xl border border-purple-500/20">
                        <Show
                            when=succeeded
                            fallback=move || {
                                view! {
                                    <form on:submit=on_submit class="space-y-6">
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                            <TextField
                                                id="name"
                                                label="Name"
                                                kind="text"
                                                value=Signal::derive(move || field_value(Field::Name))
                                                on_input=on_input(Field::Name)
                                            />
                                            <TextField
                                                id="email"
                                                label="Email Address"
                                                kind="email"
                                                value=Signal::derive(move || field_value(Field::Email))
                                                on_input=on_input(Field::Email)
                                            />
                                        </div>
                                        <TextField
                                            id="subject"
                                            label="Subject"
                                            kind="text"
                                            value=Signal::derive(move || field_value(Field::Subject))
                                            on_input=on_input(Field::Subject)
                                        />
                                        <div>
                                            <label for="message" class="block text-sm font-medium text-gray-300 mb-2">
                                                "Message"
                                            </label>
                                            <textarea
                                                id="message"
                                                name="message"
                                                rows="6"
                                                prop:value=move || field_value(Field::Message)
                                                on:input=on_input(Field::Message)
                                                class="w-full px-4 py-3 bg-gray-800/50 border border-gray-700 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent text-white placeholder-gray-500"
                                            ></textarea>
                                        </div>
                                        {move || {
                                            workflow
                                                .with(|w| w.error().map(str::to_string))
                                                .map(|err| view! { <p class="text-sm text-red-400">{err}</p> })
                                        }}
                                        <p class="text-sm text-gray-400">
                                            "By sending a message you agree to the "
                                            <button
                                                type="button"
                                                class="text-purple-400 hover:underline"
                                                on:click=move |_| dispatch.send(PageMsg::ShowTerms(true))
                                            >
                                                "Terms of Service"
                                            </button> "."
                                        </p>
                                        <div class="flex gap-4">
                                            <button
                                                type="submit"
                                                disabled=submitting
                                                class="flex-1 px-6 py-3 bg-gradient-to-r from-purple-600 to-blue-600 text-white font-medium rounded-lg hover:opacity-90 transition-opacity disabled:opacity-50"
                                            >
                                                {move || if submitting() { "Sending..." } else { "Send Message" }}
                                            </button>
                                            <button
                                                type="button"
                                                on:click=on_clear
                                                class="px-6 py-3 border border-gray-700 text-gray-300 rounded-lg hover:text-white hover:border-gray-500 transition-colors"
                                            >
                                                "Clear"
                                            </button>
                                        </div>
                                    </form>
                                }
                            }
                        >
                            <div class="text-center py-6">
                                <h3 class="text-xl font-semibold mb-2">"Message sent!"</h3>
                                <p class="text-gray-300">"Thanks for reaching out. I'll get back to you soon."</p>
                                <button
                                    class="mt-6 px-6 py-2 bg-purple-600 text-white font-medium rounded-lg hover:bg-purple-700 transition-colors"
                                    on:click=move |_| workflow.update(ContactWorkflow::acknowledge)
                                >
                                    "Send Another Message"
                                </button>
                            </div>
                        </Show>
                    </div>
                    <Newsletter />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TextField<F>(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(ev::Event) + Send + Sync + 'static,
{
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-300 mb-2">
                {label}
            </label>
            <input
                id=id
                name=id
                type=kind
                prop:value=value
                on:input=on_input
                class="w-full px-4 py-3 bg-gray-800/50 border border-gray-700 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent text-white placeholder-gray-500"
            />
        </div>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    let signup = RwSignal::new(Signup::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = if let Some(email) = signup.try_update(|s| s.begin_submit()).flatten() {
            email
        } else {
            return;
        };
        spawn_local(async move {
            let res = subscribe_email(email).await.map_err(|e| match e {
                ServerFnError::ServerError(msg) => msg,
                e => e.to_string(),
            });
            signup.update(|s| s.finish(res));
        });
    };
    let subscribed = move || signup.with(|s| *s.status() == SignupStatus::Subscribed);
    let submitting = move || signup.with(|s| *s.status() == SignupStatus::Submitting);

    view! {
        <div class="bg-gray-900/50 backdrop-blur-sm p-8 rounded-xl border border-blue-500/20">
            <h3 class="text-xl font-semibold mb-2">"Stay Connected"</h3>
            <p class="text-gray-400 mb-6">
                "Updates on new projects, insights, and data analysis tips."
            </p>
            <Show
                when=subscribed
                fallback=move || {
                    view! {
                        <form on:submit=on_submit>
                            <label for="newsletter_email" class="block text-sm font-medium text-gray-300 mb-2">
                                "Email Address"
                            </label>
                            <input
                                id="newsletter_email"
                                type="email"
                                placeholder="your.email@example.com"
                                prop:value=move || signup.with(|s| s.email().to_string())
                                on:input=move |ev| signup.update(|s| s.edit(event_target_value(&ev)))
                                class="w-full px-4 py-3 bg-gray-800/50 border border-gray-700 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent text-white placeholder-gray-500"
                            />
                            {move || {
                                signup
                                    .with(|s| match s.status() {
                                        SignupStatus::Failed(msg) => Some(msg.clone()),
                                        _ => None,
                                    })
                                    .map(|err| view! { <p class="mt-2 text-sm text-red-400">{err}</p> })
                            }}
                            <button
                                type="submit"
                                disabled=submitting
                                class="mt-6 w-full px-6 py-3 bg-gradient-to-r from-purple-600 to-blue-600 text-white font-medium rounded-lg hover:opacity-90 transition-opacity disabled:opacity-50"
                            >
                                {move || if submitting() { "Subscribing..." } else { "Subscribe" }}
                            </button>
                        </form>
                    }
                }
            >
                <div class="text-center py-6">
                    <h4 class="text-lg font-semibold mb-2">"Thank You!"</h4>
                    <p class="text-gray-300">"You've successfully subscribed to my newsletter."</p>
                    <button
                        class="mt-6 px-6 py-2 bg-purple-600 text-white font-medium rounded-lg hover:bg-purple-700 transition-colors"
                        on:click=move |_| signup.update(Signup::reset)
                    >
                        "Subscribe Another Email"
                    </button>
                </div>
            </Show>
        </div>
    }
}
