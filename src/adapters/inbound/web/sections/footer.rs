use leptos::prelude::*;

use crate::domain::value_objects::SectionId;

#[component]
pub fn SiteFooter(brand: String) -> impl IntoView {
    view! {
        <footer class="site-footer bg-slate-800 text-white py-12">
            <div class="max-w-7xl mx-auto px-6 text-center">
                <a href=SectionId::Home.href() class="footer-brand text-2xl font-bold">
                    {brand.clone()}
                </a>
                <p class="text-slate-300 mt-4">
                    "Guiding you toward balance through yoga, breath and sound."
                </p>
                <p class="footer-note text-slate-400 text-sm mt-6">
                    {format!("{}. All rights reserved.", brand)}
                </p>
            </div>
        </footer>
    }
}
