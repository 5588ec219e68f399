use leptos::prelude::*;

use crate::domain::{
    models::Testimonial,
    value_objects::{Rating, SectionId},
};

#[component]
pub fn TestimonialsSection(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id=SectionId::Testimonials.anchor() class="testimonials py-20 bg-white">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">
                        "Client Stories"
                    </h2>
                </div>
                <div class="grid md:grid-cols-2 gap-8">
                    {testimonials
                        .into_iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let Testimonial {
        id,
        name,
        role,
        content,
        rating,
    } = testimonial;

    view! {
        <article
            id=format!("testimonial-{}", id)
            class="testimonial-card bg-gradient-to-br from-slate-50 to-white rounded-xl shadow p-6"
        >
            <RatingStars rating=rating/>
            <blockquote class="testimonial-content text-slate-700 italic leading-relaxed mb-6">
                {content}
            </blockquote>
            <div class="testimonial-author">
                <p class="testimonial-name font-semibold text-slate-800">{name}</p>
                <p class="testimonial-role text-sm text-emerald-600">{role}</p>
            </div>
        </article>
    }
}

/// Exactly `Rating::MAX` stars, the first `rating` of them filled
#[component]
pub fn RatingStars(rating: Rating) -> impl IntoView {
    view! {
        <div class="rating flex mb-4" title=format!("{} out of {}", rating.value(), Rating::MAX)>
            {rating
                .indicators()
                .into_iter()
                .map(|indicator| view! { <span class=indicator.css_class()>{indicator.glyph()}</span> })
                .collect_view()}
        </div>
    }
}
