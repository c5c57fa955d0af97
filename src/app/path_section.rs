use leptos::prelude::*;

use crate::content::{timeline, TimelineEntry};
use crate::page::PathTab;
use crate::sections::Section;

#[component]
pub fn PathSection() -> impl IntoView {
    let (tab, set_tab) = signal(PathTab::default());

    view! {
        <section id=Section::Path.id() class="min-h-screen py-24 flex items-center">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"My Path"</h2>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "The experiences and studies that shaped my work in data analysis and business intelligence."
                    </p>
                </div>
                <div class="flex justify-center gap-2 mb-12" role="tablist">
                    {PathTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || (tab.get() == t).to_string()
                                    class=move || {
                                        if tab.get() == t {
                                            "px-5 py-2 rounded-lg font-medium bg-purple-600 text-white"
                                        } else {
                                            "px-5 py-2 rounded-lg font-medium bg-gray-800/60 text-gray-300 hover:text-white"
                                        }
                                    }
                                    on:click=move |_| set_tab(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="relative">
                    <div class="absolute left-4 top-0 bottom-0 w-1 bg-purple-500/30 md:hidden"></div>
                    <div class="relative z-10">
                        {move || {
                            timeline(tab.get())
                                .iter()
                                .enumerate()
                                .map(|(index, entry)| view! { <TimelineItem entry=*entry index /> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry, index: usize) -> impl IntoView {
    let row_class = if index % 2 == 0 {
        "flex md:flex-row flex-col md:gap-8 mb-12"
    } else {
        "flex md:flex-row-reverse flex-col md:gap-8 mb-12"
    };
    let heading_class = if index % 2 == 0 {
        "md:text-right text-left"
    } else {
        "md:text-left text-left"
    };

    view! {
        <div class=row_class>
            <div class="md:w-1/2 flex flex-col items-center md:items-end md:pr-8">
                <div class=heading_class>
                    <h3 class="text-xl font-bold">{entry.title}</h3>
                    <p class="text-purple-400 font-medium">{entry.period}</p>
                </div>
            </div>
            <div class="hidden md:flex flex-col items-center">
                <div class="w-4 h-4 bg-purple-500 rounded-full z-10"></div>
                <div class="w-1 bg-purple-500/30 h-full -mt-2"></div>
            </div>
            <div class="md:w-1/2 md:pl-8 mt-4 md:mt-0">
                <div class="bg-gray-900/50 backdrop-blur-sm p-6 rounded-xl border border-purple-500/20 text-left">
                    <p class="text-gray-300">{entry.description}</p>
                </div>
            </div>
        </div>
    }
}
