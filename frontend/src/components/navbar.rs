use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;
use crate::navigation::{self, SectionId};

/// Anchor click handler: smooth-scroll to `section` and run `after`.
fn scroll_link(section: SectionId, after: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if navigation::scroll_to_section(section) {
            after.emit(());
        }
    })
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let active = use_state_eq(|| SectionId::Home);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = navigation::is_scrolled(scroll_y);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(section) = navigation::current_section() {
                    active.set(section);
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let links = |mobile: bool| -> Html {
        SectionId::ALL
            .iter()
            .map(|section| {
                let is_active = *active == *section;
                html! {
                    <a
                        href={section.href()}
                        onclick={scroll_link(*section, close_menu.clone())}
                        class={classes!(
                            if mobile { "mobile-link" } else { "nav-link" },
                            is_active.then_some("active")
                        )}
                    >
                        {section.label()}
                        if !mobile {
                            <span class="nav-underline"></span>
                        }
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        width: 100%;
                        top: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(4px);
                        padding: 1rem 0;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: #ffffff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 0.75rem 0;
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                    }
                    .nav-logo img {
                        width: 4rem;
                        height: 4rem;
                        object-fit: contain;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled .nav-logo img {
                        width: 3.5rem;
                        height: 3.5rem;
                    }
                    .brand-name {
                        font-weight: 700;
                        font-size: 1.5rem;
                        color: var(--primary);
                        display: block;
                    }
                    .brand-subtitle {
                        font-size: 0.85rem;
                        color: var(--secondary-text);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        color: var(--primary);
                        font-weight: 500;
                        text-decoration: none;
                        padding-bottom: 0.25rem;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: var(--secondary);
                    }
                    .nav-underline {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        height: 2px;
                        width: 0;
                        background: linear-gradient(to right, var(--secondary), var(--accent-lime));
                        transition: width 0.3s ease;
                    }
                    .nav-link.active .nav-underline {
                        width: 100%;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--primary);
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .burger-menu svg {
                        width: 1.5rem;
                        height: 1.5rem;
                        transition: transform 0.3s ease;
                    }
                    .burger-menu.open svg {
                        transform: rotate(90deg);
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 1024px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu {
                            display: flex;
                            flex-direction: column;
                            gap: 0.5rem;
                            max-height: 0;
                            opacity: 0;
                            overflow: hidden;
                            padding: 0 1.5rem;
                            transition: all 0.3s ease-in-out;
                        }
                        .mobile-menu.open {
                            max-height: 24rem;
                            opacity: 1;
                            margin-top: 1rem;
                            padding-bottom: 1rem;
                        }
                        .mobile-link {
                            color: var(--primary);
                            font-weight: 500;
                            text-decoration: none;
                            padding: 0.75rem 1rem;
                            border-radius: 0.5rem;
                        }
                        .mobile-link.active {
                            background: var(--secondary-light);
                            font-weight: 600;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href={SectionId::Home.href()} onclick={scroll_link(SectionId::Home, close_menu.clone())} class="nav-logo">
                    <img src={config::LOGO_SRC} alt={format!("{} Logo", config::BRAND_NAME)} />
                    <div>
                        <span class="brand-name">{config::BRAND_NAME}</span>
                        <span class="brand-subtitle">{config::COACH_NAME}</span>
                    </div>
                </a>

                <div class="nav-links">
                    { links(false) }
                    <a
                        href={config::WHATSAPP_BOOKING_LINK}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary nav-cta"
                    >
                        {"Sesión Gratuita"}
                    </a>
                </div>

                <button
                    class={classes!("burger-menu", (*menu_open).then_some("open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                    aria-expanded={(*menu_open).to_string()}
                >
                    <svg fill="none" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" viewBox="0 0 24 24" stroke="currentColor">
                        if *menu_open {
                            <path d="M6 18L18 6M6 6l12 12" />
                        } else {
                            <path d="M4 6h16M4 12h16M4 18h16" />
                        }
                    </svg>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                { links(true) }
                <a
                    href={config::WHATSAPP_BOOKING_LINK}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-primary"
                >
                    {"Sesión Gratuita"}
                </a>
            </div>
        </nav>
    }
}
