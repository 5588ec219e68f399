use leptos::prelude::*;

use crate::domain::value_objects::SectionId;

/// Identity and navigation bar; links target the stable section anchors
#[component]
pub fn SiteHeader(brand: String) -> impl IntoView {
    view! {
        <header class="site-header fixed top-0 w-full bg-white/90 backdrop-blur-sm shadow-sm z-50">
            <nav class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href=SectionId::Home.href() class="brand text-xl font-bold text-emerald-700">
                    {brand}
                </a>
                <ul class="nav-links hidden md:flex space-x-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=section.href()
                                        class="nav-link text-slate-600 hover:text-emerald-600 font-medium"
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a
                    href=SectionId::Contact.href()
                    class="hidden md:inline-block bg-emerald-600 text-white px-6 py-2 rounded-full"
                >
                    "Book a Session"
                </a>
            </nav>
        </header>
    }
}
