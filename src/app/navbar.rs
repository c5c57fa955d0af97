use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::Dispatch;
use crate::content::OWNER;
use crate::page::{scrolled, PageMsg, PageState};
use crate::sections::Section;

#[component]
pub fn Navbar() -> impl IntoView {
    let page = expect_context::<ReadSignal<PageState>>();
    let dispatch = expect_context::<Dispatch>();
    let (_, scroll_y) = use_window_scroll();

    let nav_class = move || {
        if scrolled(scroll_y.get()) {
            "fixed w-full z-50 transition-all duration-300 bg-black/80 backdrop-blur-md"
        } else {
            "fixed w-full z-50 transition-all duration-300 bg-transparent"
        }
    };
    let nav_to = move |section: Section, close_menu: bool| {
        dispatch.send(PageMsg::Navigate {
            section: section.id().to_string(),
            close_menu,
        })
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        class="text-white text-xl font-bold"
                        on:click=move |_| nav_to(Section::Home, true)
                    >
                        {OWNER}
                    </button>
                    <div class="hidden md:flex items-baseline space-x-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="text-gray-300 hover:text-white px-3 py-2 rounded-md text-sm font-medium transition-colors"
                                        on:click=move |_| nav_to(section, false)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-white hover:bg-gray-700 focus:outline-none"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| dispatch.send(PageMsg::ToggleMenu)
                    >
                        {move || if page.with(|p| p.menu_open()) { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || page.with(|p| p.menu_open())>
                <div class="md:hidden bg-black/90 backdrop-blur-md">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="text-gray-300 hover:text-white block px-3 py-2 rounded-md text-base font-medium w-full text-left"
                                        on:click=move |_| nav_to(section, true)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
