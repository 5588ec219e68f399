use leptos::prelude::*;

use crate::domain::{models::ExperienceEntry, value_objects::SectionId};

#[component]
pub fn ExperienceSection(experience: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <section id=SectionId::Experience.anchor() class="experience py-20 bg-white">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">
                        "Professional Experience"
                    </h2>
                </div>
                <div class="grid gap-8 max-w-4xl mx-auto">
                    {experience
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <article
                                    id=format!("experience-{}", entry.id)
                                    class="experience-card border-l-4 border-emerald-500 rounded-lg p-6 bg-gradient-to-r from-white to-slate-50"
                                >
                                    <div class="flex flex-col md:flex-row md:justify-between">
                                        <div>
                                            <h3 class="experience-role text-xl font-bold text-slate-800">
                                                {entry.role}
                                            </h3>
                                            <p class="experience-organization text-emerald-600 font-semibold">
                                                {entry.organization}
                                            </p>
                                        </div>
                                        <span class="experience-duration bg-emerald-100 text-emerald-800 px-3 py-1 rounded-full text-sm self-start">
                                            {entry.duration}
                                        </span>
                                    </div>
                                    <p class="text-slate-700 leading-relaxed mt-4">{entry.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
