mod contact;
mod hero;
mod navbar;
mod path_section;
mod projects;
mod terms;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::OWNER;
use crate::page::{PageEffect, PageMsg, PageState, ViewState};
use crate::sections::Section;

use contact::Contact;
use hero::Hero;
use navbar::Navbar;
use path_section::PathSection;
use projects::Projects;
use terms::TermsOfService;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-950 font-sans">
                <App />
            </body>
        </html>
    }
}

/// Handle components use to send messages to the page container.
#[derive(Clone, Copy)]
pub struct Dispatch(Callback<PageMsg>);

impl Dispatch {
    pub fn send(&self, msg: PageMsg) {
        self.0.run(msg);
    }
}

/// Fired after a service request rewrote the fragment. `replaceState`
/// doesn't emit `hashchange`, so the contact form needs this nudge.
#[derive(Clone)]
pub struct ServiceRequested(pub ArcTrigger);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let page = RwSignal::new(PageState::default());
    let service_requested = ArcTrigger::new();
    provide_context(page.read_only());
    provide_context(ServiceRequested(service_requested.clone()));
    provide_context(Dispatch(Callback::new(move |msg: PageMsg| {
        let effects = page.try_update(|p| p.dispatch(msg)).unwrap_or_default();
        for effect in effects {
            apply_effect(effect, &service_requested);
        }
    })));

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <div class="relative min-h-screen text-white overflow-hidden bg-gradient-to-b from-gray-950 via-indigo-950/40 to-gray-950">
                <Navbar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let page = expect_context::<ReadSignal<PageState>>();
    let main_content = move || page.with(|p| p.view() == ViewState::MainContent);

    view! {
        <Title text="Portfolio" />
        <Show when=main_content fallback=|| view! { <TermsOfService /> }>
            {Section::ALL.into_iter().map(section_view).collect_view()}
        </Show>
    }
}

fn section_view(section: Section) -> AnyView {
    match section {
        Section::Home => view! { <Hero /> }.into_any(),
        Section::Path => view! { <PathSection /> }.into_any(),
        Section::Projects => view! { <Projects /> }.into_any(),
        Section::Contact => view! { <Contact /> }.into_any(),
    }
}

#[component]
fn Footer() -> impl IntoView {
    let page = expect_context::<ReadSignal<PageState>>();
    let dispatch = expect_context::<Dispatch>();

    view! {
        <footer class="bg-black/30 backdrop-blur-sm py-6">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-2 text-gray-400">
                <p>{format!("© {} {OWNER}. All rights reserved.", env!("BUILD_YEAR"))}</p>
                <button
                    class="hover:text-white transition-colors"
                    on:click=move |_| dispatch.send(PageMsg::ToggleTerms)
                >
                    {move || match page.with(|p| p.view()) {
                        ViewState::MainContent => "Terms of Service",
                        ViewState::TermsOfService => "Back to main content",
                    }}
                </button>
            </div>
        </footer>
    }
}

fn apply_effect(effect: PageEffect, service_requested: &ArcTrigger) {
    match effect {
        PageEffect::ScrollToTop => window().scroll_to_with_x_and_y(0.0, 0.0),
        PageEffect::ScrollTo { section, delay } => match delay {
            Some(delay) => set_timeout(move || scroll_to_section(section), delay),
            None => scroll_to_section(section),
        },
        PageEffect::ReplaceFragment(hash) => replace_fragment(&hash),
        PageEffect::ServiceRequested => service_requested.notify(),
    }
}

fn scroll_to_section(section: Section) {
    let el = if let Some(el) = document().get_element_by_id(section.id()) {
        el
    } else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub(crate) fn current_fragment() -> String {
    window().location().hash().unwrap_or_default()
}

pub(crate) fn replace_fragment(hash: &str) {
    let res = window()
        .history()
        .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(hash)));
    if let Err(e) = res {
        log::warn!("couldn't update URL fragment: {e:?}");
    }
}
