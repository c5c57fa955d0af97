use leptos::prelude::*;

use super::Dispatch;
use crate::content::{Service, OWNER, SERVICES, TAGLINE};
use crate::page::PageMsg;
use crate::sections::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();
    let nav_to = move |section: Section| {
        dispatch.send(PageMsg::Navigate {
            section: section.id().to_string(),
            close_menu: false,
        })
    };

    view! {
        <section id=Section::Home.id() class="min-h-screen pt-16 flex flex-col justify-center">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4">
                            <span class="bg-clip-text text-transparent bg-gradient-to-r from-purple-400 to-blue-500">
                                {OWNER}
                            </span>
                        </h1>
                        <h2 class="text-xl md:text-2xl text-gray-300 mb-6">{TAGLINE}</h2>
                        <p class="text-gray-400 mb-8 max-w-lg">
                            "Transforming complex data into actionable insights. Specializing in data analysis, ETL pipeline development, and business intelligence solutions that drive strategic decisions."
                        </p>
                        <div class="flex space-x-4">
                            <button
                                class="px-6 py-3 bg-gradient-to-r from-purple-600 to-blue-600 text-white font-medium rounded-lg hover:opacity-90 transition-opacity"
                                on:click=move |_| nav_to(Section::Contact)
                            >
                                "Get in Touch"
                            </button>
                            <button
                                class="px-6 py-3 border border-purple-500 text-white font-medium rounded-lg hover:bg-purple-500/10 transition-colors"
                                on:click=move |_| nav_to(Section::Projects)
                            >
                                "View Projects"
                            </button>
                        </div>
                    </div>
                    <div class="relative mx-auto lg:mx-0 w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-purple-500/30">
                        <img src="/images/avatar.svg" alt=OWNER class="w-full h-full object-cover" />
                    </div>
                </div>
                <div class="mt-24">
                    <h3 class="text-2xl md:text-3xl font-bold mb-12 text-center">"My Services"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {SERVICES.into_iter().map(|s| view! { <ServiceCard service=s /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();
    let (card_class, cta_class) = accent_classes(service.accent);

    view! {
        <div class=card_class>
            <h4 class="text-xl font-semibold mb-3">{service.name}</h4>
            <p class="text-gray-400 mb-6">{service.blurb}</p>
            <button
                class=cta_class
                on:click=move |_| dispatch.send(PageMsg::RequestService(service.name.to_string()))
            >
                "Request this service"
            </button>
        </div>
    }
}

// spelled out in full so tailwind picks the classes up
fn accent_classes(accent: &str) -> (&'static str, &'static str) {
    match accent {
        "blue" => (
            "bg-gray-900/50 backdrop-blur-sm p-6 rounded-xl border border-blue-500/20 hover:border-blue-500/50 transition-all flex flex-col",
            "mt-auto self-start px-4 py-2 rounded-lg text-sm font-medium bg-blue-500/20 text-blue-300 hover:bg-blue-500/30 transition-colors",
        ),
        "cyan" => (
            "bg-gray-900/50 backdrop-blur-sm p-6 rounded-xl border border-cyan-500/20 hover:border-cyan-500/50 transition-all flex flex-col",
            "mt-auto self-start px-4 py-2 rounded-lg text-sm font-medium bg-cyan-500/20 text-cyan-300 hover:bg-cyan-500/30 transition-colors",
        ),
        _ => (
            "bg-gray-900/50 backdrop-blur-sm p-6 rounded-xl border border-purple-500/20 hover:border-purple-500/50 transition-all flex flex-col",
            "mt-auto self-start px-4 py-2 rounded-lg text-sm font-medium bg-purple-500/20 text-purple-300 hover:bg-purple-500/30 transition-colors",
        ),
    }
}
