//! Static page content. Everything here is read-only data consumed by the
//! section components; nothing mutates it at runtime.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Review {
    pub id: &'static str,
    pub name: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub treatment: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryCase {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub badge: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub starred: bool,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "Gallery", href: "#gallery" },
    NavLink { name: "Reviews", href: "#reviews" },
    NavLink { name: "Pricing", href: "#pricing" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "2k+", label: "Happy Patients", starred: false },
    Stat { value: "15+", label: "Years Experience", starred: false },
    Stat { value: "4.9", label: "Google Rating", starred: true },
];

pub const CREDENTIALS: &[&str] = &[
    "ADA Member",
    "Invisalign Certified",
    "Cosmetic Specialist",
    "Painless Certified",
];

pub const SERVICES: &[Service] = &[
    Service {
        id: "general",
        title: "General Dentistry",
        description: "Routine check-ups, cleanings, and preventive care to keep your smile healthy year-round.",
        icon: "🛡️",
    },
    Service {
        id: "cosmetic",
        title: "Cosmetic Dentistry",
        description: "Whitening, veneers, and smile makeovers to give you the confidence you deserve.",
        icon: "✨",
    },
    Service {
        id: "orthodontics",
        title: "Orthodontics",
        description: "Invisalign and traditional braces for children and adults to align your perfect smile.",
        icon: "😁",
    },
    Service {
        id: "implants",
        title: "Dental Implants",
        description: "Permanent, natural-looking solutions for missing teeth using the latest titanium tech.",
        icon: "⚓",
    },
    Service {
        id: "surgery",
        title: "Oral Surgery",
        description: "Expert wisdom tooth removal and corrective jaw surgeries with minimal discomfort.",
        icon: "🩺",
    },
    Service {
        id: "emergency",
        title: "Emergency Care",
        description: "Same-day appointments for toothaches, chips, and urgent dental needs.",
        icon: "⚡",
    },
];

pub const GALLERY: &[GalleryCase] = &[
    GalleryCase {
        title: "Complete Smile Makeover",
        description: "Porcelain veneers to correct spacing and discoloration.",
        image: "https://images.unsplash.com/photo-1606811841689-23dfddce3e95?auto=format&fit=crop&q=80&w=800",
        badge: "Veneers",
    },
    GalleryCase {
        title: "Zoom! Whitening",
        description: "4 shades whiter in just one 60-minute session.",
        image: "https://images.unsplash.com/photo-1588776814546-1b936d544c1b?auto=format&fit=crop&q=80&w=800",
        badge: "Whitening",
    },
];

pub const WHY_CHOOSE_US: &[Feature] = &[
    Feature {
        title: "Experienced Team",
        description: "Our doctors have over 20 years of combined clinical experience in complex restorative cases.",
        icon: "🏆",
    },
    Feature {
        title: "Modern Technology",
        description: "We use digital X-rays, 3D imaging, and intraoral cameras for precise diagnoses.",
        icon: "🖥️",
    },
    Feature {
        title: "Painless Dentistry",
        description: "Relax during your visit with our advanced sedation options and gentle techniques.",
        icon: "❤️",
    },
    Feature {
        title: "Emergency Care",
        description: "We understand that tooth pain can't wait. Same-day appointments are available.",
        icon: "⚡",
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        id: "1",
        name: "Sarah Jenkins",
        rating: 5,
        text: "I used to be terrified of the dentist, but Dr. Emily and her team made me feel so comfortable. The painless injection technology is a game changer!",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=150&h=150",
    },
    Review {
        id: "2",
        name: "Michael Ross",
        rating: 5,
        text: "Incredible results with my Invisalign treatment. The clinic is modern, clean, and the staff is super friendly. Highly recommended!",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=150&h=150",
    },
    Review {
        id: "3",
        name: "Elena Rodriguez",
        rating: 5,
        text: "Had an emergency root canal on a Sunday. They got me in immediately and fixed the pain. Forever grateful to Lumina Dental.",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=150&h=150",
    },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        treatment: "New Patient Special",
        price: "$99",
        features: &["Comprehensive Exam", "Full Mouth X-Rays", "Basic Cleaning", "Consultation"],
    },
    PricingTier {
        treatment: "Teeth Whitening",
        price: "$299",
        features: &["In-Office Zoom! Treatment", "Take-Home Touch-up Kit", "Desensitizing Gel", "1 Hour Session"],
    },
    PricingTier {
        treatment: "Invisalign",
        price: "$3,500+",
        features: &["3D Scans", "All Aligners Included", "Retainers", "Monthly Check-ups"],
    },
];

/// Index into [`PRICING`] rendered as the highlighted "Most Popular" tier.
pub const FEATURED_TIER: usize = 1;

pub const INSURERS: &[&str] = &["Delta Dental", "Cigna", "Aetna", "MetLife"];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Do you accept insurance?",
        answer: "Yes, we accept most major PPO insurance plans including Delta Dental, Cigna, MetLife, and Aetna. We also offer financing options via CareCredit.",
    },
    FaqEntry {
        question: "How often should I get a dental cleaning?",
        answer: "For most patients, we recommend a professional cleaning and exam every six months. Patients with gum disease may need to visit more frequently.",
    },
    FaqEntry {
        question: "Is teeth whitening safe?",
        answer: "Yes, professional teeth whitening is very safe when supervised by a dentist. We use medical-grade products that protect your enamel while lifting stains.",
    },
    FaqEntry {
        question: "What should I do in a dental emergency?",
        answer: "Call us immediately at (555) 123-4567. We set aside time daily for emergency appointments. If it is outside hours, our answering service will direct you.",
    },
];

pub const APPOINTMENT_SERVICES: &[(&str, &str)] = &[
    ("checkup", "General Checkup"),
    ("cleaning", "Professional Cleaning"),
    ("whitening", "Teeth Whitening"),
    ("emergency", "Emergency Care"),
];

pub const FOOTER_LINKS: &[&str] = &["About Us", "Our Services", "Patient Forms", "Privacy Policy"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_tier_points_at_a_real_tier() {
        assert!(FEATURED_TIER < PRICING.len());
    }

    #[test]
    fn nav_links_target_page_anchors() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }
}
