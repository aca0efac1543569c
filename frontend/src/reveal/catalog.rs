//! The landing page's scroll animations.

use super::declaration::{AnimationDeclaration, Easing, PropertyDelta, Replay, Trigger, VisualState};

/// Sections whose `.section-header` children slide up as a staggered group.
const HEADED_SECTIONS: &[&str] = &["#services", "#gallery", "#features", "#reviews", "#pricing", "#faq", "#contact"];

fn hidden() -> VisualState {
    VisualState::IDENTITY.opacity(0.0)
}

fn section_header(section: &str) -> AnimationDeclaration {
    let header = format!("{section} .section-header");
    AnimationDeclaration::new(
        &format!("{section}-header"),
        &format!("{header} > *"),
        PropertyDelta::from_state(hidden().y(40.0)),
    )
    .trigger(Trigger::enter_on(&header, 0.85))
    .replay(Replay::Reverse)
    .duration(1000.0)
    .stagger(100.0)
    .easing(Easing::Power3Out)
}

fn grid_cards(name: &str, selector: &str, from: VisualState) -> AnimationDeclaration {
    AnimationDeclaration::new(name, selector, PropertyDelta::from_state(from))
        .trigger(Trigger::enter(0.85))
        .replay(Replay::Reverse)
}

pub fn landing_declarations() -> Vec<AnimationDeclaration> {
    let mut declarations = vec![
        AnimationDeclaration::new(
            "hero-parallax",
            ".hero-bg-img",
            PropertyDelta::to_state(VisualState::IDENTITY.y_percent(30.0)),
        )
        .trigger(Trigger::scrub_on("#home", 0.0))
        .easing(Easing::Linear),
        AnimationDeclaration::new(
            "hero-entrance",
            ".hero-content > *",
            PropertyDelta::from_state(hidden().y(60.0)),
        )
        .trigger(Trigger::Immediate)
        .duration(1200.0)
        .delay(200.0)
        .stagger(100.0)
        .easing(Easing::Power3Out),
        AnimationDeclaration::new(
            "about-image",
            ".about-img-reveal",
            PropertyDelta::from_state(VisualState::IDENTITY.reveal(0.0)),
        )
        .trigger(Trigger::enter(0.75))
        .duration(1500.0)
        .easing(Easing::Power4InOut),
        AnimationDeclaration::new(
            "about-content",
            ".about-content > *",
            PropertyDelta::from_state(hidden().x(30.0)),
        )
        .trigger(Trigger::enter_on(".about-content", 0.8))
        .duration(1000.0)
        .stagger(100.0)
        .easing(Easing::Power3Out),
    ];

    declarations.extend(HEADED_SECTIONS.iter().map(|section| section_header(section)));

    declarations.extend([
        grid_cards("services", ".services-grid > *", hidden().y(50.0))
            .duration(800.0)
            .stagger(100.0)
            .stagger_cycle(3)
            .easing(Easing::BackOut(1.2))
            .trigger(Trigger::enter(0.9)),
        grid_cards("gallery", ".gallery-card", hidden().y(60.0))
            .duration(1000.0)
            .stagger(200.0)
            .easing(Easing::Power3Out),
        grid_cards("features", ".features-grid > *", hidden().y(30.0).scale(0.9))
            .duration(600.0)
            .stagger(100.0)
            .stagger_cycle(2)
            .easing(Easing::BackOut(1.7)),
        grid_cards("reviews", ".reviews-grid > *", hidden().x(50.0))
            .duration(1000.0)
            .stagger(150.0)
            .easing(Easing::Power3Out),
        grid_cards("pricing", ".pricing-grid > *", hidden().y(50.0))
            .duration(800.0)
            .stagger(150.0)
            .easing(Easing::Power2Out),
    ]);

    declarations
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::reveal::declaration::Anchor;

    #[test]
    fn names_are_unique() {
        let declarations = landing_declarations();
        let names: HashSet<_> = declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), declarations.len());
    }

    #[test]
    fn section_headers_share_one_trigger_per_section() {
        let services = landing_declarations()
            .into_iter()
            .find(|d| d.name == "#services-header")
            .unwrap();
        assert_eq!(services.target_selector, "#services .section-header > *");
        assert_eq!(
            services.trigger.anchor(),
            Some(&Anchor::Selector("#services .section-header".to_string()))
        );
        assert_eq!(services.replay, Replay::Reverse);
    }

    #[test]
    fn hero_parallax_is_scrubbed() {
        let parallax = landing_declarations()
            .into_iter()
            .find(|d| d.name == "hero-parallax")
            .unwrap();
        assert!(matches!(parallax.trigger, Trigger::Scrub { .. }));
        assert_eq!(parallax.delta.to.y_percent, 30.0);
    }
}
