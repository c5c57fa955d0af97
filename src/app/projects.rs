use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::projects::{catalog, Project, Selection};
use crate::sections::Section;

#[component]
pub fn Projects() -> impl IntoView {
    let selection = RwSignal::new(Selection::default());
    let dismiss = move || selection.update(Selection::dismiss);

    let _ = use_event_listener(use_window(), ev::keydown, move |e| {
        if e.key() == "Escape" && selection.with_untracked(Selection::is_open) {
            dismiss();
        }
    });

    view! {
        <section id=Section::Projects.id() class="min-h-screen pt-24 pb-0">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Projects"</h2>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "A timeline of selected work. Pick a project for the details."
                    </p>
                </div>
                <div class="relative overflow-x-auto pb-8">
                    <div class="absolute left-0 right-0 top-6 h-1 bg-purple-500/30"></div>
                    <ol class="relative flex gap-8 min-w-max px-4">
                        {catalog()
                            .iter()
                            .map(|project| {
                                let id = project.id.clone();
                                view! {
                                    <li class="w-72 flex flex-col items-center">
                                        <div class="w-4 h-4 mt-4 mb-6 bg-purple-500 rounded-full z-10"></div>
                                        <button
                                            class="text-left w-full bg-gray-900/50 backdrop-blur-sm p-6 rounded-xl border border-purple-500/20 hover:border-purple-500/50 transition-all"
                                            on:click=move |_| {
                                                selection.update(|s| {
                                                    s.select(&id);
                                                })
                                            }
                                        >
                                            <p class="text-purple-400 text-sm mb-2">{project.display_date()}</p>
                                            <h3 class="text-lg font-semibold mb-2">{project.title.clone()}</h3>
                                            <p class="text-gray-400 text-sm">{project.description.clone()}</p>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </div>
            {move || {
                selection
                    .with(Selection::selected)
                    .map(|project| view! { <ProjectModal project on_close=dismiss /> })
            }}
        </section>
    }
}

#[component]
fn ProjectModal<F>(project: &'static Project, on_close: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/70 backdrop-blur-sm" on:click=move |_| on_close()></div>
            <div
                role="dialog"
                aria-modal="true"
                class="relative bg-gray-900/90 backdrop-blur-sm rounded-xl border border-purple-500/20 shadow-xl max-w-4xl w-full max-h-[85vh] overflow-y-auto"
            >
                <button
                    class="absolute top-4 right-4 text-gray-400 hover:text-white transition-colors z-10 text-2xl"
                    aria-label="Close modal"
                    on:click=move |_| on_close()
                >
                    "✕"
                </button>
                <div class="p-6 md:p-8 flex flex-col md:flex-row gap-8">
                    <div class="md:w-1/2">
                        <img
                            src=project.image_url.clone()
                            alt=project.title.clone()
                            class="w-full h-auto rounded-lg shadow-lg shadow-purple-500/10"
                        />
                        <div class="mt-6 space-y-4">
                            <p class="text-gray-400">"📅 " {project.display_date()}</p>
                            <div class="flex flex-wrap gap-4">
                                {project
                                    .github_url
                                    .clone()
                                    .map(|href| view! { <ExternalLink href label="View Code" /> })}
                                {project
                                    .demo_url
                                    .clone()
                                    .map(|href| view! { <ExternalLink href label="Live Demo" /> })}
                            </div>
                        </div>
                    </div>
                    <div class="md:w-1/2">
                        <h3 class="text-2xl font-bold mb-3">{project.title.clone()}</h3>
                        <p class="text-gray-300 mb-4">{project.description.clone()}</p>
                        <div class="flex flex-wrap gap-2 mb-6">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 bg-purple-500/20 text-purple-400 rounded-full text-sm">
                                            {tech.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <article class="prose prose-invert max-w-none" inner_html=project.readme.clone()></article>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExternalLink(href: String, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-2 text-gray-300 hover:text-white transition-colors bg-gray-800/50 px-4 py-2 rounded-lg hover:bg-gray-800"
        >
            {label}
        </a>
    }
}
