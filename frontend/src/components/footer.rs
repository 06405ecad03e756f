use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;
use crate::navigation::{self, SectionId};

/// `animation-delay` of the n-th footer block.
fn stagger_delay(position: u32) -> String {
    format!("animation-delay: {}ms", position * config::FOOTER_STAGGER_MS)
}

struct ContactItem {
    icon: &'static str,
    text: &'static str,
    href: Option<&'static str>,
}

const CONTACT_ITEMS: [ContactItem; 4] = [
    ContactItem { icon: "📍", text: "CABA y zona norte, Buenos Aires", href: None },
    ContactItem { icon: "📧", text: config::CONTACT_EMAIL, href: Some("mailto:luciavallejo@coachingderaiz.com") },
    ContactItem { icon: "📱", text: config::WHATSAPP_DISPLAY, href: Some(config::WHATSAPP_BOOKING_LINK) },
    ContactItem { icon: "📸", text: config::INSTAGRAM_HANDLE, href: Some(config::INSTAGRAM_URL) },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let reveal = use_reveal(1, config::REVEAL_THRESHOLD);
    let year = Local::now().year();
    let animate = reveal.is_visible(0).then_some("footer-animate");

    let quick_links = SectionId::ALL
        .iter()
        .map(|section| {
            let section = *section;
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                navigation::scroll_to_section(section);
            });
            html! {
                <li><a href={section.href()} {onclick}>{section.label()}</a></li>
            }
        })
        .collect::<Html>();

    let contact_items = CONTACT_ITEMS
        .iter()
        .map(|item| {
            let body = match item.href {
                Some(href) => {
                    let external = !href.starts_with("mailto:");
                    html! {
                        <a {href} target={external.then_some("_blank")} rel={external.then_some("noopener noreferrer")}>
                            {item.text}
                        </a>
                    }
                }
                None => html! { <span>{item.text}</span> },
            };
            html! {
                <li><span class="footer-icon">{item.icon}</span>{body}</li>
            }
        })
        .collect::<Html>();

    html! {
        <footer class="site-footer" ref={reveal.node(0)}>
            <style>
                {r#"
                    .site-footer {
                        background: var(--primary);
                        color: #ffffff;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .footer-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2.5rem;
                    }
                    .footer-block {
                        opacity: 0;
                    }
                    .footer-block.footer-animate {
                        animation: footer-bounce-in 0.8s ease-out forwards;
                    }
                    .footer-brand img {
                        width: 4rem;
                        height: 4rem;
                        object-fit: contain;
                    }
                    .footer-brand h3 {
                        font-size: 1.5rem;
                        margin: 0.75rem 0 0.25rem;
                    }
                    .footer-block h4 {
                        color: var(--accent-lime);
                        margin-bottom: 1rem;
                    }
                    .footer-block ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                    }
                    .footer-block a {
                        color: rgba(255, 255, 255, 0.85);
                        text-decoration: none;
                    }
                    .footer-block a:hover {
                        color: var(--accent-lime);
                    }
                    .footer-icon {
                        margin-right: 0.5rem;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social a {
                        padding: 0.5rem 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        border-radius: 9999px;
                    }
                    .footer-bottom {
                        max-width: 1280px;
                        margin: 3rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        text-align: center;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div class={classes!("footer-block", "footer-brand", animate)} style={stagger_delay(0)}>
                    <img src={config::LOGO_SRC} alt={format!("{} Logo", config::BRAND_NAME)} loading="lazy" />
                    <h3>{config::BRAND_NAME}</h3>
                    <p>{config::COACH_NAME}</p>
                    <p>{"Acompaño procesos de cambio personal y profesional desde la raíz."}</p>
                </div>
                <div class={classes!("footer-block", animate)} style={stagger_delay(1)}>
                    <h4>{"Enlaces Rápidos"}</h4>
                    <ul>{quick_links}</ul>
                </div>
                <div class={classes!("footer-block", animate)} style={stagger_delay(2)}>
                    <h4>{"Contacto"}</h4>
                    <ul>{contact_items}</ul>
                </div>
                <div class={classes!("footer-block", animate)} style={stagger_delay(3)}>
                    <h4>{"Síguenos en redes"}</h4>
                    <div class="footer-social">
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                        <a href={config::WHATSAPP_BOOKING_LINK} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. Todos los derechos reservados.", year, config::BRAND_NAME)}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_staggered() {
        assert_eq!(stagger_delay(0), "animation-delay: 0ms");
        assert_eq!(stagger_delay(3), "animation-delay: 450ms");
    }
}
