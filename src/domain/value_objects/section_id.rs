/// Stable identifiers of the scroll targets on the page, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Experience,
    Certifications,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Experience,
        SectionId::Certifications,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Element id the host uses to bring the section into view
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Experience => "experience",
            SectionId::Certifications => "certifications",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Experience => "Experience",
            SectionId::Certifications => "Certifications",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}
