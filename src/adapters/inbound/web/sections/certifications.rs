use leptos::prelude::*;

use crate::domain::{models::Certification, value_objects::SectionId};

#[component]
pub fn CertificationsSection(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <section
            id=SectionId::Certifications.anchor()
            class="certifications py-20 bg-gradient-to-br from-slate-50 to-emerald-50"
        >
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">
                        "Certifications and Training"
                    </h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {certifications
                        .into_iter()
                        .map(|cert| {
                            view! {
                                <article
                                    id=format!("certification-{}", cert.id)
                                    class="certification-card bg-white rounded-xl shadow p-6"
                                >
                                    <span class="certification-year bg-emerald-100 text-emerald-800 px-3 py-1 rounded-full text-sm">
                                        {cert.year}
                                    </span>
                                    <h3 class="certification-title text-lg font-bold text-slate-800 mt-4">
                                        {cert.title}
                                    </h3>
                                    <p class="certification-issuer text-emerald-600 font-medium">
                                        {cert.issuer}
                                    </p>
                                    <p class="text-slate-600 text-sm mt-2">{cert.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
