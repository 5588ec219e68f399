mod about;
mod certifications;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod services;
mod testimonials;

pub use about::AboutSection;
pub use certifications::CertificationsSection;
pub use contact::{ContactFormCard, ContactSection};
pub use experience::ExperienceSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::HeroSection;
pub use services::{ServiceCard, ServicesSection};
pub use testimonials::{RatingStars, TestimonialCard, TestimonialsSection};
