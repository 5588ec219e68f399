use leptos::prelude::*;

use crate::domain::{models::About, value_objects::SectionId};

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    let About {
        title,
        description,
        highlights,
        current_focus,
    } = about;

    view! {
        <section id=SectionId::About.anchor() class="about py-20 bg-white">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">{title}</h2>
                    <p class="text-lg text-slate-600 max-w-3xl mx-auto">{description}</p>
                </div>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold text-slate-800 mb-6">
                            "My Professional Journey"
                        </h3>
                        <ul class="highlights space-y-4">
                            {highlights
                                .into_iter()
                                .map(|highlight| {
                                    view! {
                                        <li class="highlight text-slate-700 font-medium">{highlight}</li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="current-focus p-8 bg-gradient-to-br from-emerald-50 to-blue-50 rounded-xl shadow-lg">
                        <h3 class="text-xl font-semibold text-slate-800 mb-4">"Current Focus"</h3>
                        <p class="text-slate-700 leading-relaxed">{current_focus}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
