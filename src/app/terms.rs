use leptos::prelude::*;
use leptos_meta::Title;

use super::Dispatch;
use crate::content::OWNER;
use crate::page::PageMsg;

#[component]
pub fn TermsOfService() -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();

    view! {
        <Title text="Terms of Service" />
        <section id="terms" class="min-h-screen pt-24 pb-12 flex items-center">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12 relative">
                    <button
                        class="absolute left-0 top-1/2 -translate-y-1/2 text-gray-400 hover:text-white transition-colors"
                        aria-label="Back to main content"
                        on:click=move |_| dispatch.send(PageMsg::ShowTerms(false))
                    >
                        "← " <span class="hidden sm:inline">"Back"</span>
                    </button>
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Terms of Service"</h2>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "Please read these terms carefully before using our services."
                    </p>
                </div>
                <div class="bg-gray-900/50 backdrop-blur-sm p-6 sm:p-8 rounded-xl border border-purple-500/20">
                    <div class="prose prose-invert max-w-none">
                        <h3>"1. Introduction"</h3>
                        <p>
                            {format!("Welcome to {OWNER}'s portfolio website. By accessing or using this website, you agree to be bound by these Terms of Service.")}
                        </p>
                        <h3>"2. Data Collection and Usage"</h3>
                        <p>
                            "When you submit information through forms on this website, such as the contact form or the newsletter signup, we collect:"
                        </p>
                        <ul>
                            <li>"Your name"</li>
                            <li>"Your email address"</li>
                            <li>"Any additional information you provide in message fields"</li>
                        </ul>
                        <h3>"3. Data Storage"</h3>
                        <p>
                            "Submitted data is stored with a hosted database provider. We take appropriate technical and organizational measures against unauthorized or unlawful processing, accidental loss, destruction, or damage."
                        </p>
                        <h3>"4. Data Sharing"</h3>
                        <p>"We may share your personal information with third parties only:"</p>
                        <ul>
                            <li>"With service providers that help operate this website, such as the email delivery provider"</li>
                            <li>"When required by law or to respond to legal process"</li>
                            <li>"To protect our rights, property, or safety, or that of others"</li>
                        </ul>
                        <h3>"5. Your Rights"</h3>
                        <p>"You have the right to:"</p>
                        <ul>
                            <li>"Access the personal data we hold about you"</li>
                            <li>"Request correction of inaccurate personal data"</li>
                            <li>"Request deletion of your personal data"</li>
                            <li>"Object to, or request restriction of, processing of your personal data"</li>
                        </ul>
                        <p>"To exercise any of these rights, please use the contact form on this website."</p>
                        <h3>"6. Changes to Terms"</h3>
                        <p>
                            "We may modify these terms at any time. Significant changes are announced by updating this page."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
