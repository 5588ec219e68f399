use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::{
    document::render_document,
    sections::{
        AboutSection, CertificationsSection, ContactSection, ExperienceSection, HeroSection,
        ServicesSection, SiteFooter, SiteHeader, TestimonialsSection,
    },
};
use crate::{
    domain::models::{PortfolioContent, Readiness},
    services::ContactFormView,
};

const FALLBACK_TITLE: &str = "Wellness Portfolio";

/// The whole page, in fixed order: header, hero, about, services, experience,
/// certifications, testimonials, contact, footer
#[component]
pub fn PortfolioPage(content: PortfolioContent, form: ContactFormView) -> impl IntoView {
    let brand = content.brand().to_string();
    let PortfolioContent {
        hero,
        about,
        services,
        experience,
        certifications,
        testimonials,
        contact,
    } = content;

    view! {
        <div class="portfolio-page page-fade-in min-h-screen bg-gradient-to-br from-green-50 via-white to-blue-50">
            <SiteHeader brand=brand.clone()/>
            <main>
                <HeroSection hero=hero/>
                <AboutSection about=about/>
                <ServicesSection services=services/>
                <ExperienceSection experience=experience/>
                <CertificationsSection certifications=certifications/>
                <TestimonialsSection testimonials=testimonials/>
                <ContactSection contact=contact form=form/>
            </main>
            <SiteFooter brand=brand/>
        </div>
    }
}

/// Neutral placeholder shown until the content is ready
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="page-status page-loading bg-white">
            <p class="text-lg text-slate-600">"Loading..."</p>
        </div>
    }
}

#[component]
pub fn ErrorView(message: String) -> impl IntoView {
    view! {
        <div class="page-status page-error bg-white">
            <div class="text-center">
                <p class="text-lg text-slate-700">"This page is unavailable right now."</p>
                <p class="diagnostic text-sm text-slate-500">{message}</p>
            </div>
        </div>
    }
}

/// Render the body for the given readiness; nothing but `Ready` draws a section
pub fn render_body(readiness: &Readiness, form: ContactFormView) -> String {
    match readiness {
        Readiness::Ready(content) => {
            let content = PortfolioContent::clone(content);
            view! { <PortfolioPage content=content form=form/> }.to_html()
        }
        Readiness::Loading => view! { <LoadingView/> }.to_html(),
        Readiness::Failed(e) => view! { <ErrorView message=e.to_string()/> }.to_html(),
    }
}

/// Render the complete HTML document
pub fn render_page(readiness: &Readiness, form: ContactFormView) -> String {
    let title = match readiness.content() {
        Some(content) => format!("{} | Wellness & Healing", content.brand()),
        None => FALLBACK_TITLE.to_string(),
    };
    render_document(&title, &render_body(readiness, form))
}
