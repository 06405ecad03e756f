use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose controller logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND_NAME: &str = "Coaching de Raíz";
pub const COACH_NAME: &str = "Lucía Vallejo";
pub const LOGO_SRC: &str = "/logos/logocoaching.svg";

// Contact channels
pub const WHATSAPP_PHONE: &str = "5491136677321";
pub const WHATSAPP_DISPLAY: &str = "+54 9 11 3667-7321";
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";
pub const WHATSAPP_BOOKING_LINK: &str = "https://wa.me/message/VPS3R5LKA4QNJ1";
pub const CALENDLY_URL: &str = "https://calendly.com/yaninaluciavallejo/sesion-gratuita-para-conocernos";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/coachingderaiz/";
pub const INSTAGRAM_HANDLE: &str = "@coachingderaiz";
pub const CONTACT_EMAIL: &str = "luciavallejo@coachingderaiz.com";

/// Fraction of an element that has to be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Height of the fixed navbar; anchor scrolling stops this far above a section.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;
/// Probe line used to decide which section is currently under the navbar.
pub const NAV_ACTIVE_PROBE: f64 = 100.0;
pub const NAV_SCROLLED_AFTER: f64 = 20.0;

pub const CAROUSEL_INTERVAL_MS: u32 = 5000;
pub const FOOTER_STAGGER_MS: u32 = 150;
