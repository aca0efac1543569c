use log::info;
use yew::prelude::*;

use crate::config;
use crate::content::APPOINTMENT_SERVICES;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3151.835434509374!2d144.9537353153167!3d-37.817323442021134!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x6ad65d4c2b349649%3A0xb6899234e561db11!2sEnvato!5e0!3m2!1sen!2sus!4v1642998765432!5m2!1sen!2sus";

/// Appointment request form plus the clinic's contact card. The form is not
/// sent anywhere; submitting only swaps in a confirmation.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let requested = use_state(|| false);

    let onsubmit = {
        let requested = requested.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Appointment request captured locally");
            requested.set(true);
        })
    };
    let reset = {
        let requested = requested.clone();
        Callback::from(move |_: MouseEvent| requested.set(false))
    };

    html! {
        <div class="contact-card">
            <div class="contact-form-side">
                <h3>{"Send us a Message"}</h3>
                if *requested {
                    <div class="form-confirmation">
                        <p>{"Thanks! Our front desk will reach out within one business day to confirm your visit."}</p>
                        <button class="link-button" onclick={reset}>{"Send another request"}</button>
                    </div>
                } else {
                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <label>
                                <span>{"First Name"}</span>
                                <input type="text" name="first_name" placeholder="John" required=true />
                            </label>
                            <label>
                                <span>{"Last Name"}</span>
                                <input type="text" name="last_name" placeholder="Doe" />
                            </label>
                        </div>
                        <label>
                            <span>{"Email"}</span>
                            <input type="email" name="email" placeholder="john@example.com" required=true />
                        </label>
                        <label>
                            <span>{"Service"}</span>
                            <select name="service">
                                <option value="">{"Select a Treatment"}</option>
                                { for APPOINTMENT_SERVICES.iter().map(|(value, label)| html! {
                                    <option value={*value}>{*label}</option>
                                }) }
                            </select>
                        </label>
                        <label>
                            <span>{"Message"}</span>
                            <textarea name="message" rows="4" placeholder="Tell us about your needs..." />
                        </label>
                        <button type="submit" class="primary-button">{"Request Appointment ➤"}</button>
                    </form>
                }
            </div>
            <div class="contact-info-side">
                <div class="contact-info">
                    <h3>{"Contact Information"}</h3>
                    <div class="info-row">
                        <span class="info-icon">{"📞"}</span>
                        <div>
                            <strong>{"Phone"}</strong>
                            <p>{config::CLINIC_PHONE}</p>
                            <p class="muted">{config::CLINIC_HOURS}</p>
                        </div>
                    </div>
                    <div class="info-row">
                        <span class="info-icon">{"📍"}</span>
                        <div>
                            <strong>{"Location"}</strong>
                            <p>{config::CLINIC_ADDRESS}</p>
                            <p>{config::CLINIC_CITY}</p>
                        </div>
                    </div>
                    <div class="info-row">
                        <span class="info-icon">{"✉️"}</span>
                        <div>
                            <strong>{"Email"}</strong>
                            <p>{config::CLINIC_EMAIL}</p>
                        </div>
                    </div>
                </div>
                <iframe
                    class="contact-map"
                    src={MAP_EMBED_URL}
                    title="Clinic location"
                    loading="lazy"
                ></iframe>
            </div>
        </div>
    }
}
