use leptos::prelude::*;

use crate::domain::{models::Hero, value_objects::SectionId};

#[component]
pub fn HeroSection(hero: Hero) -> impl IntoView {
    let Hero {
        name,
        tagline,
        description,
    } = hero;

    view! {
        <section
            id=SectionId::Home.anchor()
            class="hero relative min-h-screen flex items-center justify-center pt-20"
        >
            <div class="max-w-7xl mx-auto px-6 text-center relative z-10">
                <div class="flex justify-center mb-6">
                    <span class="hero-badge bg-emerald-100 text-emerald-800 px-4 py-2 rounded-full font-medium">
                        "Wellness and Healing Guide"
                    </span>
                </div>
                <h1 class="hero-name text-5xl md:text-7xl font-bold text-slate-800 mb-6 leading-tight">
                    {name}
                </h1>
                <p class="hero-tagline text-xl md:text-2xl text-slate-600 max-w-3xl mx-auto mb-6">
                    {tagline}
                </p>
                <p class="hero-description text-lg text-slate-600 max-w-4xl mx-auto mb-8 leading-relaxed">
                    {description}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-16">
                    <a
                        href=SectionId::Contact.href()
                        class="bg-emerald-600 hover:bg-emerald-700 text-white px-8 py-3 rounded-full text-lg font-medium"
                    >
                        "Start Your Wellness Journey"
                    </a>
                    <a
                        href=SectionId::About.href()
                        class="border border-emerald-600 text-emerald-600 hover:bg-emerald-50 px-8 py-3 rounded-full text-lg font-medium"
                    >
                        "Learn My Story"
                    </a>
                </div>
            </div>
        </section>
    }
}
