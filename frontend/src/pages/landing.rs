use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::faq::FaqList;
use crate::config;
use crate::content::{
    CREDENTIALS, FAQS, FEATURED_TIER, FOOTER_LINKS, GALLERY, HERO_STATS, INSURERS, PRICING,
    REVIEWS, SERVICES, WHY_CHOOSE_US,
};
use crate::reveal::catalog::landing_declarations;
use crate::reveal::dom::use_reveal;

fn section_header(eyebrow: &str, title: &str, lead: Option<&str>) -> Html {
    html! {
        <div class="section-header">
            <span class="eyebrow">{eyebrow.to_string()}</span>
            <h2>{title.to_string()}</h2>
            if let Some(lead) = lead {
                <p class="lead">{lead.to_string()}</p>
            }
        </div>
    }
}

/// One filled star per rating point, capped at five.
fn star_rating(rating: u8) -> String {
    String::from("★").repeat(usize::from(rating.min(5)))
}

fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-bg">
                <img
                    class="hero-bg-img"
                    src="https://images.unsplash.com/photo-1629909613654-28e377c37b09?auto=format&fit=crop&q=80&w=2000"
                    alt="Modern dental clinic"
                />
                <div class="hero-overlay"></div>
            </div>
            <div class="container">
                <div class="hero-content">
                    <div class="badge"><span class="pulse"></span>{"Accepting New Patients"}</div>
                    <h1>{"Crafting Smiles,"}<br/><span class="accent">{"Changing Lives."}</span></h1>
                    <p class="hero-lead">
                        {"Experience world-class dental care where advanced technology meets compassionate treatment. Your journey to a perfect smile begins here."}
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="primary-button">{"Book Appointment →"}</a>
                        <a href="#services" class="ghost-button">{"Explore Services"}</a>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">
                                    {stat.label}
                                    if stat.starred { {" ★"} }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <a href="#about" class="scroll-indicator" aria-label="Scroll to about">{"⌄"}</a>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container about-grid">
                <div class="about-media">
                    <div class="about-img-reveal">
                        <img
                            src="https://images.unsplash.com/photo-1559839734-2b71ea197ec2?auto=format&fit=crop&q=80&w=1000"
                            alt="Dr. Emily Chen"
                        />
                    </div>
                    <div class="floating-badge">
                        <strong>{"Top Rated"}</strong>
                        <span>{"Dentist 2024"}</span>
                        <p>{"\"Dedicated to excellence in every smile.\""}</p>
                    </div>
                </div>
                <div class="about-content">
                    <span class="eyebrow">{"About The Doctor"}</span>
                    <h2>{"Meet Dr. Emily Chen,"}<br/><span class="accent">{"Your Smile Architect"}</span></h2>
                    <p>
                        {"Dr. Chen graduated with honors from Harvard School of Dental Medicine and has dedicated her career to bringing confidence back to her patients' smiles. With a focus on minimally invasive dentistry and aesthetic perfection, she combines art and science to deliver exceptional results."}
                    </p>
                    <p>
                        {"She believes that a visit to the dentist should be a positive, empowering experience. Her clinic is designed to be a sanctuary of calm where cutting-edge technology meets genuine human care."}
                    </p>
                    <div class="credentials">
                        { for CREDENTIALS.iter().map(|item| html! {
                            <div class="credential"><span class="check">{"✓"}</span>{*item}</div>
                        }) }
                    </div>
                    <div class="signature">{"Lead Dentist"}</div>
                </div>
            </div>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                { section_header(
                    "Our Expertise",
                    "Comprehensive Dental Care",
                    Some("From routine hygiene to full mouth reconstruction, we use the latest technology to ensure the best outcomes for your oral health."),
                ) }
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card" key={service.id}>
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <a href="#contact" class="card-link">{"Learn More →"}</a>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn gallery() -> Html {
    html! {
        <section id="gallery" class="gallery">
            <div class="container">
                { section_header(
                    "Real Results",
                    "Transformed Smiles",
                    Some("Witness the life-changing confidence we bring to our patients through our cosmetic and restorative procedures."),
                ) }
                <div class="gallery-grid">
                    { for GALLERY.iter().map(|case| html! {
                        <div class="gallery-card">
                            <div class="gallery-image">
                                <img src={case.image} alt={case.title} />
                                <span class="gallery-badge">{case.badge}</span>
                            </div>
                            <h3>{case.title}</h3>
                            <p>{case.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn why_choose_us() -> Html {
    html! {
        <section id="features" class="features">
            <div class="container features-layout">
                <div>
                    { section_header(
                        "Why Choose Lumina",
                        "Experience the Difference in Modern Dentistry",
                        Some("We combine art, science, and technology to provide the highest standard of dental care. Our patient-first approach ensures you feel heard, comfortable, and cared for at every step."),
                    ) }
                    <a href="#contact" class="primary-button">{"Schedule Your Visit →"}</a>
                </div>
                <div class="features-grid">
                    { for WHY_CHOOSE_US.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h4>{feature.title}</h4>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn reviews() -> Html {
    html! {
        <section id="reviews" class="reviews">
            <div class="container">
                { section_header("Testimonials", "What Our Patients Say", None) }
                <div class="reviews-grid">
                    { for REVIEWS.iter().map(|review| html! {
                        <div class="review-card" key={review.id}>
                            <div class="stars">{ star_rating(review.rating) }</div>
                            <p class="review-text">{format!("\"{}\"", review.text)}</p>
                            <div class="reviewer">
                                <img src={review.image} alt={review.name} />
                                <div>
                                    <strong>{review.name}</strong>
                                    <span>{"Verified patient"}</span>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn pricing() -> Html {
    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                { section_header(
                    "Pricing",
                    "Transparent Pricing",
                    Some("No hidden fees. Just clear, honest pricing for your dental care."),
                ) }
                <div class="pricing-grid">
                    { for PRICING.iter().enumerate().map(|(index, tier)| {
                        let featured = index == FEATURED_TIER;
                        html! {
                            <div class={classes!("pricing-card", featured.then(|| "featured"))}>
                                if featured {
                                    <span class="popular-tag">{"Most Popular"}</span>
                                }
                                <h3>{tier.treatment}</h3>
                                <div class="price">
                                    <span class="amount">{tier.price}</span>
                                    <span class="per">{"/ starting at"}</span>
                                </div>
                                <ul>
                                    { for tier.features.iter().map(|feature| html! {
                                        <li><span class="check">{"✓"}</span>{*feature}</li>
                                    }) }
                                </ul>
                                <a href="#contact" class="select-plan">{"Select Plan"}</a>
                            </div>
                        }
                    }) }
                </div>
                <div class="insurance-banner">
                    <div>
                        <h3>{"🛡 We Accept Insurance"}</h3>
                        <p>{format!("We work with {}, and many major providers.", INSURERS.join(", "))}</p>
                    </div>
                    <div class="insurers">
                        { for INSURERS.iter().map(|name| html! { <span>{*name}</span> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn faq() -> Html {
    html! {
        <section id="faq" class="faq">
            <div class="container narrow">
                { section_header("Common Questions", "Frequently Asked Questions", None) }
                <FaqList entries={FAQS} />
            </div>
        </section>
    }
}

fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <div class="container">
                { section_header(
                    "Get in Touch",
                    "Book Your Appointment",
                    Some("We look forward to welcoming you to our clinic."),
                ) }
                <ContactSection />
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let subscribed = use_state(|| false);
    let onsubmit = {
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            subscribed.set(true);
        })
    };

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <div class="footer-logo">{config::CLINIC_NAME}</div>
                    <p>{"Pioneering the future of dental care with technology, expertise, and a gentle human touch."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for FOOTER_LINKS.iter().map(|link| html! { <li><a href="#">{*link}</a></li> }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for SERVICES.iter().take(4).map(|service| html! {
                            <li><a href="#services">{service.title}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Newsletter"}</h4>
                    <p>{"Subscribe to get the latest dental health tips."}</p>
                    if *subscribed {
                        <p class="newsletter-done">{"You're subscribed. Thanks!"}</p>
                    } else {
                        <form class="newsletter" {onsubmit}>
                            <input type="email" placeholder="Your Email" required=true />
                            <button type="submit" aria-label="Subscribe">{"→"}</button>
                        </form>
                    }
                </div>
            </div>
            <div class="container footer-bottom">
                <span>{format!("© {} {} Clinic. All rights reserved.", Local::now().year(), config::CLINIC_NAME)}</span>
                <span>
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                </span>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_reveal(landing_declarations);

    html! {
        <div class="landing-page">
            <style>{LANDING_STYLES}</style>
            { hero() }
            { about() }
            { services() }
            { gallery() }
            { why_choose_us() }
            { reviews() }
            { pricing() }
            { faq() }
            { contact() }
            <Footer />
        </div>
    }
}

const LANDING_STYLES: &str = r#"
.landing-page {
    font-family: 'Inter', system-ui, sans-serif;
    color: #0f172a;
    overflow-x: hidden;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.container.narrow {
    max-width: 800px;
}
section {
    padding: 7rem 0;
}
.accent {
    color: #14b8a6;
}
.eyebrow {
    display: inline-block;
    color: #0d9488;
    font-weight: 700;
    font-size: 0.8rem;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    margin-bottom: 1rem;
}
.section-header {
    text-align: center;
    max-width: 720px;
    margin: 0 auto 4rem;
}
.section-header h2 {
    font-size: clamp(2rem, 4vw, 3rem);
    margin: 0 0 1rem;
}
.section-header .lead {
    color: #64748b;
    font-size: 1.1rem;
    line-height: 1.7;
}
.primary-button {
    display: inline-block;
    background: #0d9488;
    color: #ffffff;
    padding: 1rem 2rem;
    border-radius: 999px;
    border: none;
    font-weight: 700;
    text-decoration: none;
    cursor: pointer;
    transition: background 0.2s ease;
}
.primary-button:hover {
    background: #0f766e;
}
.ghost-button {
    display: inline-block;
    padding: 1rem 2rem;
    border-radius: 999px;
    border: 1px solid rgba(255, 255, 255, 0.4);
    color: #ffffff;
    text-decoration: none;
    font-weight: 600;
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
    color: #ffffff;
}
.hero-bg {
    position: absolute;
    inset: 0;
    z-index: -1;
}
.hero-bg-img {
    width: 100%;
    height: 120%;
    object-fit: cover;
    will-change: transform;
}
.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, rgba(15, 23, 42, 0.92), rgba(15, 23, 42, 0.4));
}
.hero-content {
    max-width: 640px;
}
.hero-content h1 {
    font-size: clamp(2.8rem, 6vw, 4.5rem);
    line-height: 1.05;
    margin: 1.5rem 0;
}
.hero-lead {
    font-size: 1.2rem;
    color: #cbd5e1;
    line-height: 1.7;
}
.badge {
    display: inline-flex;
    gap: 0.6rem;
    align-items: center;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    padding: 0.5rem 1rem;
    border-radius: 999px;
    font-size: 0.85rem;
}
.pulse {
    width: 0.6rem;
    height: 0.6rem;
    border-radius: 50%;
    background: #2dd4bf;
}
.hero-actions {
    display: flex;
    gap: 1rem;
    flex-wrap: wrap;
    margin: 2.5rem 0;
}
.hero-stats {
    display: flex;
    gap: 3rem;
    border-top: 1px solid rgba(255, 255, 255, 0.15);
    padding-top: 2rem;
}
.stat-value {
    font-size: 2rem;
    font-weight: 700;
}
.stat-label {
    color: #94a3b8;
    font-size: 0.85rem;
}
.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    color: #ffffff;
    font-size: 2rem;
    text-decoration: none;
}

/* About */
.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 5rem;
    align-items: center;
}
.about-media {
    position: relative;
}
.about-img-reveal {
    border-radius: 2rem;
    overflow: hidden;
}
.about-img-reveal img {
    width: 100%;
    display: block;
}
.floating-badge {
    position: absolute;
    bottom: -2rem;
    right: -1.5rem;
    background: #ffffff;
    padding: 1.5rem;
    border-radius: 1.5rem;
    box-shadow: 0 20px 50px rgba(15, 23, 42, 0.15);
    display: flex;
    flex-direction: column;
    max-width: 15rem;
}
.floating-badge p {
    color: #64748b;
    font-style: italic;
    font-size: 0.85rem;
}
.about-content h2 {
    font-size: clamp(2rem, 4vw, 3rem);
}
.about-content p {
    color: #475569;
    line-height: 1.8;
}
.credentials {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    margin: 2rem 0;
}
.credential {
    display: flex;
    gap: 0.6rem;
    font-weight: 600;
}
.check {
    color: #0d9488;
}
.signature {
    font-family: cursive;
    font-size: 1.4rem;
    color: #64748b;
}

/* Cards */
.services {
    background: #f8fafc;
}
.services-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.service-card,
.feature-card,
.review-card,
.pricing-card {
    background: #ffffff;
    border-radius: 2rem;
    padding: 2.5rem;
    box-shadow: 0 10px 40px rgba(15, 23, 42, 0.06);
    border: 1px solid #f1f5f9;
}
.service-icon,
.feature-icon {
    font-size: 2rem;
    margin-bottom: 1.5rem;
}
.service-card p,
.feature-card p {
    color: #64748b;
    line-height: 1.7;
}
.card-link {
    color: #0d9488;
    font-weight: 700;
    text-decoration: none;
}
.gallery-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
}
.gallery-image {
    position: relative;
    border-radius: 2rem;
    overflow: hidden;
}
.gallery-image img {
    width: 100%;
    height: 24rem;
    object-fit: cover;
    display: block;
}
.gallery-badge {
    position: absolute;
    top: 1.5rem;
    left: 1.5rem;
    background: #14b8a6;
    color: #ffffff;
    padding: 0.3rem 0.9rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 700;
}
.features {
    background: #0f172a;
    color: #ffffff;
}
.features .section-header {
    text-align: left;
    margin: 0 0 2rem;
}
.features .section-header .lead {
    color: #94a3b8;
}
.features-layout {
    display: grid;
    grid-template-columns: 1fr 1.2fr;
    gap: 4rem;
    align-items: center;
}
.features-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}
.feature-card {
    background: rgba(255, 255, 255, 0.05);
    border-color: rgba(255, 255, 255, 0.08);
    color: #ffffff;
}
.reviews-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.stars {
    color: #f59e0b;
    letter-spacing: 0.15em;
}
.review-text {
    color: #475569;
    line-height: 1.8;
    font-style: italic;
}
.reviewer {
    display: flex;
    gap: 1rem;
    align-items: center;
}
.reviewer img {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    object-fit: cover;
}
.reviewer div {
    display: flex;
    flex-direction: column;
}
.reviewer span {
    color: #94a3b8;
    font-size: 0.8rem;
}

/* Pricing */
.pricing {
    background: #f8fafc;
}
.pricing-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    align-items: center;
}
.pricing-card {
    position: relative;
}
.pricing-card.featured {
    background: #0f172a;
    color: #ffffff;
    transform-origin: center;
    box-shadow: 0 30px 60px rgba(15, 23, 42, 0.3);
}
.popular-tag {
    position: absolute;
    top: -0.9rem;
    left: 50%;
    transform: translateX(-50%);
    background: #14b8a6;
    color: #ffffff;
    padding: 0.3rem 1rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 700;
}
.price .amount {
    font-size: 3rem;
    font-weight: 700;
    color: #0d9488;
}
.pricing-card.featured .amount {
    color: #2dd4bf;
}
.price .per {
    color: #94a3b8;
    font-size: 0.85rem;
    margin-left: 0.4rem;
}
.pricing-card ul {
    list-style: none;
    padding: 0;
    margin: 2rem 0;
    display: flex;
    flex-direction: column;
    gap: 0.8rem;
}
.select-plan {
    display: block;
    text-align: center;
    padding: 1rem;
    border-radius: 1rem;
    background: #f1f5f9;
    color: #0f172a;
    font-weight: 700;
    text-decoration: none;
}
.pricing-card.featured .select-plan {
    background: #14b8a6;
    color: #ffffff;
}
.insurance-banner {
    margin-top: 4rem;
    background: #ffffff;
    border-radius: 2rem;
    padding: 2.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 2rem;
    flex-wrap: wrap;
}
.insurers {
    display: flex;
    gap: 2rem;
    font-weight: 800;
    color: #94a3b8;
}

/* FAQ */
.faq-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.faq-item {
    border: 1px solid #e2e8f0;
    border-radius: 1.25rem;
    background: #ffffff;
}
.faq-item.open {
    border-color: #99f6e4;
    box-shadow: 0 10px 30px rgba(13, 148, 136, 0.08);
}
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.5rem;
    background: none;
    border: none;
    font-size: 1.05rem;
    font-weight: 700;
    text-align: left;
    cursor: pointer;
}
.faq-item.open .question-text {
    color: #0d9488;
}
.faq-answer {
    padding: 0 1.5rem 1.5rem;
    color: #475569;
    line-height: 1.7;
}

/* Contact */
.contact-card {
    display: grid;
    grid-template-columns: 1fr 1fr;
    background: #ffffff;
    border-radius: 3rem;
    overflow: hidden;
    box-shadow: 0 30px 80px rgba(15, 23, 42, 0.12);
}
.contact-form-side {
    padding: 4rem;
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}
.contact-form label {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    font-size: 0.75rem;
    font-weight: 700;
    color: #64748b;
    text-transform: uppercase;
}
.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.25rem;
}
.contact-form input,
.contact-form select,
.contact-form textarea {
    padding: 1rem 1.25rem;
    border-radius: 0.9rem;
    border: 1px solid transparent;
    background: #f8fafc;
    font-size: 1rem;
    font-family: inherit;
    resize: none;
}
.contact-form input:focus,
.contact-form select:focus,
.contact-form textarea:focus {
    outline: none;
    border-color: #14b8a6;
    background: #ffffff;
}
.form-confirmation p {
    color: #0f766e;
    font-size: 1.1rem;
    line-height: 1.7;
}
.link-button {
    background: none;
    border: none;
    color: #0d9488;
    font-weight: 700;
    cursor: pointer;
    padding: 0;
}
.contact-info-side {
    position: relative;
    background: #0f172a;
    color: #ffffff;
    min-height: 32rem;
}
.contact-info {
    position: relative;
    z-index: 1;
    padding: 4rem;
}
.info-row {
    display: flex;
    gap: 1.25rem;
    margin-bottom: 2rem;
}
.info-row p {
    margin: 0.25rem 0 0;
    color: #cbd5e1;
}
.info-row .muted {
    color: #94a3b8;
    font-size: 0.85rem;
}
.info-icon {
    font-size: 1.5rem;
}
.contact-map {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    border: 0;
    opacity: 0.35;
    filter: grayscale(100%) invert(90%) contrast(80%);
}

/* Footer */
.site-footer {
    background: #020617;
    color: #94a3b8;
    padding: 6rem 0 3rem;
}
.footer-grid {
    display: grid;
    grid-template-columns: 1.5fr 1fr 1fr 1.5fr;
    gap: 3rem;
}
.footer-logo {
    color: #ffffff;
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
}
.site-footer h4 {
    color: #ffffff;
}
.site-footer ul {
    list-style: none;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.8rem;
}
.site-footer a {
    color: #94a3b8;
    text-decoration: none;
}
.site-footer a:hover {
    color: #2dd4bf;
}
.newsletter {
    display: flex;
    gap: 0.5rem;
}
.newsletter input {
    flex: 1;
    padding: 0.75rem 1rem;
    border-radius: 0.6rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    color: #ffffff;
}
.newsletter button {
    border: none;
    border-radius: 0.6rem;
    background: #0d9488;
    color: #ffffff;
    padding: 0 1rem;
    cursor: pointer;
}
.newsletter-done {
    color: #2dd4bf;
}
.footer-bottom {
    margin-top: 4rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    display: flex;
    justify-content: space-between;
    font-size: 0.85rem;
}
.footer-bottom a {
    margin-left: 1.5rem;
}

@media (max-width: 900px) {
    section { padding: 5rem 0; }
    .about-grid,
    .features-layout,
    .contact-card,
    .gallery-grid,
    .footer-grid {
        grid-template-columns: 1fr;
    }
    .services-grid,
    .reviews-grid,
    .pricing-grid {
        grid-template-columns: 1fr;
    }
    .hero-stats { gap: 1.5rem; }
    .contact-form-side,
    .contact-info { padding: 2.5rem; }
    .floating-badge { right: 1rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_rating_repeats_per_point() {
        assert_eq!(star_rating(5), "★★★★★");
        assert_eq!(star_rating(3), "★★★");
        assert_eq!(star_rating(0), "");
        assert_eq!(star_rating(9).chars().count(), 5);
    }

    #[test]
    fn every_review_renders_its_stars() {
        for review in REVIEWS {
            assert_eq!(star_rating(review.rating).chars().count(), review.rating as usize);
        }
    }
}
