pub const CLINIC_NAME: &str = "Lumina Dental";
pub const CLINIC_PHONE: &str = "(555) 123-4567";
pub const CLINIC_EMAIL: &str = "hello@luminadental.com";
pub const CLINIC_ADDRESS: &str = "123 Medical Plaza, Suite 400";
pub const CLINIC_CITY: &str = "New York, NY 10001";
pub const CLINIC_HOURS: &str = "Mon - Fri: 9:00 AM - 6:00 PM";

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[cfg(debug_assertions)]
pub fn get_assistant_base_url() -> &'static str {
    match option_env!("GEMINI_BASE_URL") {
        Some(url) => url,
        None => "https://generativelanguage.googleapis.com/v1beta",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_assistant_base_url() -> &'static str {
    "https://generativelanguage.googleapis.com/v1beta"
}

/// Baked in at build time. `None` leaves the assistant unconfigured and
/// every chat message falls back to the apology text.
pub fn get_assistant_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.trim().is_empty())
}

pub fn get_assistant_model() -> &'static str {
    option_env!("GEMINI_MODEL").unwrap_or(DEFAULT_MODEL)
}

pub const ASSISTANT_SYSTEM_INSTRUCTION: &str = "You are a friendly, professional, and empathetic AI dental assistant for 'Lumina Dental'.
Your goal is to answer general questions about dental procedures, oral hygiene, and the clinic's general policies based on standard dental knowledge.

Key Info about Lumina Dental:
- We offer General, Cosmetic, Orthodontic, Implant, and Emergency dentistry.
- We accept most PPO insurance.
- We prioritize painless treatments.

Guidelines:
- Keep answers concise (under 100 words).
- Be reassuring to anxious patients.
- Do NOT give specific medical diagnoses. Always advise the patient to book an appointment for a proper diagnosis.
- If asked about booking, tell them to use the form on the website or call (555) 123-4567.";
