use std::sync::Arc;
use wellness_portfolio::{
    adapters::{inbound::web::render_page, outbound::content::BUNDLED_CONTENT},
    domain::{
        errors::{ContentError, ValidationError},
        models::{PortfolioContent, Readiness, Testimonial},
        value_objects::{Rating, SectionId},
    },
    services::ContactForm,
};

fn bundled() -> PortfolioContent {
    PortfolioContent::from_json(BUNDLED_CONTENT).unwrap()
}

fn render(content: PortfolioContent) -> String {
    render_page(&Readiness::Ready(Arc::new(content)), ContactForm::new().view())
}

fn testimonial(id: u32, name: &str, role: &str, rating: i64) -> Testimonial {
    Testimonial {
        id,
        name: name.to_string(),
        role: role.to_string(),
        content: "Calm, clear guidance.".to_string(),
        rating: Rating::new(rating).unwrap(),
    }
}

#[test]
fn rendering_is_deterministic() {
    let first = render(bundled());
    let second = render(bundled());
    assert_eq!(first, second);
}

#[test]
fn sections_render_in_fixed_order() {
    let html = render(bundled());

    let positions: Vec<usize> = SectionId::ALL
        .iter()
        .map(|section| {
            html.find(&format!("id=\"{}\"", section.anchor()))
                .unwrap_or_else(|| panic!("section {} missing", section.anchor()))
        })
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(html.find("site-header").unwrap() < positions[0]);
    assert!(html.find("site-footer").unwrap() > positions[positions.len() - 1]);
}

#[test]
fn page_binds_content_and_brand() {
    let html = render(bundled());

    assert!(html.contains("Gunjan Jagtiani | Wellness"));
    assert!(html.contains("page-fade-in"));
    assert!(html.contains("Yoga for Beginners"));
    assert!(html.contains("gunjan.wellness@gmail.com"));
    assert!(html.contains("href=\"#contact\""));
    // Every service card links to the contact section
    assert_eq!(html.matches("Book Session").count(), 4);
}

#[test]
fn services_use_their_palette_styles() {
    let html = render(bundled());

    for color in ["emerald", "rose", "violet", "blue"] {
        assert!(
            html.contains(&format!("service-card service-{}", color)),
            "no {} card",
            color
        );
    }
}

#[test]
fn every_rating_renders_five_indicators() {
    for rating in 0..=5 {
        let mut content = bundled();
        content.testimonials = vec![testimonial(1, "Emma Wilson", "Corporate Professional", rating)];

        let html = render(content);
        let filled = html.matches("star star-filled").count();
        let empty = html.matches("star star-empty").count();

        assert_eq!(filled, rating as usize, "rating {}", rating);
        assert_eq!(filled + empty, 5, "rating {}", rating);
    }
}

#[test]
fn sarah_martinez_card() {
    let mut content = bundled();
    content.testimonials = vec![testimonial(1, "Sarah Martinez", "New Mother", 5)];

    let html = render(content);

    assert_eq!(html.matches("testimonial-card").count(), 1);
    assert_eq!(html.matches("star star-filled").count(), 5);
    assert_eq!(html.matches("star star-empty").count(), 0);
    assert!(html.contains("Sarah Martinez"));
    assert!(html.contains("New Mother"));
}

#[test]
fn loading_renders_no_section() {
    let html = render_page(&Readiness::Loading, ContactForm::new().view());

    assert!(html.contains("Loading..."));
    assert!(!html.contains("<section"));
    assert!(!html.contains("site-header"));
}

#[test]
fn failed_provider_renders_no_section() {
    let readiness = Readiness::Failed(ContentError::retrieval(
        "http://localhost:8001/api/portfolio",
        "connection refused",
    ));
    let html = render_page(&readiness, ContactForm::new().view());

    assert!(html.contains("page-error"));
    assert!(html.contains("connection refused"));
    assert!(!html.contains("<section"));
    assert!(!html.contains("testimonial-card"));
}

#[test]
fn unknown_color_is_rejected_before_render() {
    let mut json: serde_json::Value = serde_json::from_slice(BUNDLED_CONTENT).unwrap();
    json["services"][0]["color"] = serde_json::json!("teal");

    let err = PortfolioContent::from_json(&serde_json::to_vec(&json).unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::UnknownPaletteColor("teal".to_string()));
}

#[test]
fn out_of_range_rating_is_rejected_before_render() {
    let mut json: serde_json::Value = serde_json::from_slice(BUNDLED_CONTENT).unwrap();
    json["testimonials"][0]["rating"] = serde_json::json!(6);

    let err = PortfolioContent::from_json(&serde_json::to_vec(&json).unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::RatingOutOfRange { actual: 6, max: 5 });
}
