use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::NAV_LINKS;

/// Past this many pixels the navbar gets its solid background.
const SCROLLED_THRESHOLD_PX: f64 = 20.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    // Anchor navigation still happens, only the drawer closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <style>{NAV_STYLES}</style>
            <div class="top-bar">
                <div class="top-bar-inner">
                    <span>{format!("📍 {}, {}", config::CLINIC_ADDRESS, config::CLINIC_CITY)}</span>
                    <span>{format!("🕘 {}", config::CLINIC_HOURS)}</span>
                    <a href={format!("tel:{}", config::CLINIC_PHONE)}>{format!("📞 {}", config::CLINIC_PHONE)}</a>
                </div>
            </div>
            <nav class={classes!("site-nav", is_scrolled(scroll_y).then(|| "scrolled"))}>
                <div class="nav-inner">
                    <a href="#home" class="nav-logo" onclick={close_menu.clone()}>
                        <span class="logo-mark">{"✦"}</span>
                        {config::CLINIC_NAME}
                    </a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a href={link.href}>{link.name}</a>
                        }) }
                        <a href="#contact" class="nav-cta">{"Book Now"}</a>
                    </div>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
                if *menu_open {
                    <div class="mobile-menu">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a href={link.href} onclick={close_menu.clone()}>{link.name}</a>
                        }) }
                        <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>{"Book Appointment"}</a>
                    </div>
                }
            </nav>
        </>
    }
}

const NAV_STYLES: &str = r#"
.top-bar {
    background: #0f172a;
    color: #cbd5e1;
    font-size: 0.85rem;
}
.top-bar-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0.5rem 1.5rem;
    display: flex;
    gap: 2rem;
    justify-content: flex-end;
}
.top-bar a {
    color: inherit;
    text-decoration: none;
}
.site-nav {
    position: fixed;
    top: 2.2rem;
    left: 0;
    right: 0;
    z-index: 50;
    transition: all 0.3s ease;
}
.site-nav.scrolled {
    top: 0;
    background: rgba(255, 255, 255, 0.92);
    backdrop-filter: blur(12px);
    box-shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
}
.nav-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    font-weight: 700;
    font-size: 1.4rem;
    color: #ffffff;
    text-decoration: none;
    display: flex;
    gap: 0.5rem;
}
.site-nav.scrolled .nav-logo,
.site-nav.scrolled .nav-links a {
    color: #0f172a;
}
.logo-mark {
    color: #14b8a6;
}
.nav-links {
    display: flex;
    gap: 2rem;
    align-items: center;
}
.nav-links a {
    color: #e2e8f0;
    text-decoration: none;
    font-weight: 500;
}
.nav-links a:hover {
    color: #14b8a6;
}
.nav-cta {
    background: #14b8a6;
    color: #ffffff !important;
    padding: 0.6rem 1.4rem;
    border-radius: 999px;
}
.menu-toggle {
    display: none;
    background: none;
    border: none;
    font-size: 1.5rem;
    color: inherit;
    cursor: pointer;
}
.mobile-menu {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1.5rem;
    background: #ffffff;
}
.mobile-menu a {
    color: #0f172a;
    text-decoration: none;
    font-weight: 500;
}
@media (max-width: 900px) {
    .top-bar { display: none; }
    .site-nav { top: 0; }
    .nav-links { display: none; }
    .menu-toggle { display: block; color: #ffffff; }
    .site-nav.scrolled .menu-toggle { color: #0f172a; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }
}
