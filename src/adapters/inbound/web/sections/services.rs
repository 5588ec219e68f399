use leptos::prelude::*;

use crate::domain::{models::ServiceOffering, value_objects::SectionId};

#[component]
pub fn ServicesSection(services: Vec<ServiceOffering>) -> impl IntoView {
    view! {
        <section
            id=SectionId::Services.anchor()
            class="services py-20 bg-gradient-to-br from-slate-50 to-white"
        >
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">
                        "Wellness Services"
                    </h2>
                    <p class="text-lg text-slate-600 max-w-3xl mx-auto">
                        "Discover healing through movement, breath, and sound."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-8">
                    {services
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One offering, drawn in the style bundle of its palette color
#[component]
pub fn ServiceCard(service: ServiceOffering) -> impl IntoView {
    let style = service.color.style();
    let ServiceOffering {
        id,
        title,
        description,
        features,
        icon,
        color,
    } = service;

    view! {
        <article
            id=format!("service-{}", id)
            class=format!("service-card service-{} bg-gradient-to-br {} border rounded-xl p-6", color, style.card)
        >
            <div class="flex items-center justify-between mb-4">
                <span class="service-icon text-4xl">{icon}</span>
                <span class=format!("service-badge px-3 py-1 rounded-full text-sm {}", style.badge)>
                    "Popular"
                </span>
            </div>
            <h3 class="service-title text-xl font-bold text-slate-800 mb-4">{title}</h3>
            <p class="text-slate-700 mb-6 leading-relaxed">{description}</p>
            <ul class="service-features space-y-2 mb-6">
                {features
                    .into_iter()
                    .map(|feature| view! { <li class="feature text-sm text-slate-600">{feature}</li> })
                    .collect_view()}
            </ul>
            <a
                href=SectionId::Contact.href()
                class="book-session block w-full text-center border border-emerald-600 rounded-lg py-2"
            >
                "Book Session"
            </a>
        </article>
    }
}
