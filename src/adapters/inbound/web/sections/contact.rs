use leptos::prelude::*;

use crate::{
    domain::{
        models::ContactInfo,
        value_objects::{SectionId, ServiceKey},
    },
    services::{ContactFormView, FormNotice},
};

#[component]
pub fn ContactSection(contact: ContactInfo, form: ContactFormView) -> impl IntoView {
    let ContactInfo {
        title,
        description,
        email,
        phone,
        services,
    } = contact;

    view! {
        <section
            id=SectionId::Contact.anchor()
            class="contact py-20 bg-gradient-to-br from-emerald-50 to-blue-50"
        >
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">{title}</h2>
                    <p class="text-lg text-slate-600 max-w-3xl mx-auto">{description}</p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="contact-details space-y-6">
                        <p class="contact-email">
                            <a href=format!("mailto:{}", email) class="text-emerald-700 font-medium">
                                {email.clone()}
                            </a>
                        </p>
                        <p class="contact-phone text-slate-700">{phone}</p>
                        <div class="contact-services flex flex-wrap gap-2">
                            {services
                                .into_iter()
                                .map(|service| {
                                    view! {
                                        <span class="contact-service bg-white text-emerald-700 px-3 py-1 rounded-full text-sm">
                                            {service}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <ContactFormCard form=form/>
                </div>
            </div>
        </section>
    }
}

/// The contact form as a plain HTML form posting back to `/contact`
#[component]
pub fn ContactFormCard(form: ContactFormView) -> impl IntoView {
    let ContactFormView {
        draft,
        submitting,
        notice,
    } = form;
    let selected = draft.selected_service();
    let nothing_selected = selected.is_none();
    let button_label = if submitting { "Sending..." } else { "Send Message" };

    let notice = notice.map(|notice| match notice {
        FormNotice::Success { title, message } => view! {
            <div class="form-notice form-success bg-emerald-50 border border-emerald-200 rounded-lg p-4 mb-6">
                <p class="font-semibold text-emerald-800">{title}</p>
                <p class="text-emerald-700">{message}</p>
            </div>
        }
        .into_any(),
        FormNotice::Error { message } => view! {
            <div class="form-notice form-error bg-rose-50 border border-rose-200 rounded-lg p-4 mb-6">
                <p class="text-rose-700">{message}</p>
            </div>
        }
        .into_any(),
    });

    view! {
        <div class="contact-form-card bg-white rounded-xl shadow-lg p-8">
            {notice}
            <form id="contact-form" method="post" action="/contact" class="space-y-6">
                <label class="block">
                    <span class="text-slate-700 font-medium">"Name"</span>
                    <input
                        type="text"
                        name="name"
                        value=draft.name
                        placeholder="Your full name"
                        required=true
                        disabled=submitting
                        class="w-full mt-1 border rounded-lg px-4 py-2"
                    />
                </label>
                <label class="block">
                    <span class="text-slate-700 font-medium">"Email"</span>
                    <input
                        type="email"
                        name="email"
                        value=draft.email
                        placeholder="you@example.com"
                        required=true
                        disabled=submitting
                        class="w-full mt-1 border rounded-lg px-4 py-2"
                    />
                </label>
                <label class="block">
                    <span class="text-slate-700 font-medium">"Service"</span>
                    <select
                        name="service"
                        required=true
                        disabled=submitting
                        class="w-full mt-1 border rounded-lg px-4 py-2"
                    >
                        <option value="" selected=nothing_selected>
                            "Select a service"
                        </option>
                        {ServiceKey::ALL
                            .into_iter()
                            .map(|key| {
                                let is_selected = selected == Some(key);
                                view! {
                                    <option value=key.as_str() selected=is_selected>
                                        {key.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="block">
                    <span class="text-slate-700 font-medium">"Message"</span>
                    <textarea
                        name="message"
                        rows="5"
                        placeholder="Tell me about your wellness goals"
                        required=true
                        disabled=submitting
                        class="w-full mt-1 border rounded-lg px-4 py-2"
                    >
                        {draft.message}
                    </textarea>
                </label>
                <button
                    type="submit"
                    disabled=submitting
                    class="submit-button w-full bg-emerald-600 text-white py-3 rounded-lg font-medium"
                >
                    {button_label}
                </button>
            </form>
        </div>
    }
}
